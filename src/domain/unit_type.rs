use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a unit file, derived from its filename extension.
///
/// `Unknown` is the only not-found value; classification never yields an
/// absent tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitType {
    Service,
    Socket,
    Target,
    Device,
    Mount,
    Automount,
    Timer,
    Swap,
    Path,
    Slice,
    Scope,
    Unknown,
}

impl UnitType {
    pub const ALL: [UnitType; 11] = [
        UnitType::Service,
        UnitType::Socket,
        UnitType::Target,
        UnitType::Device,
        UnitType::Mount,
        UnitType::Automount,
        UnitType::Timer,
        UnitType::Swap,
        UnitType::Path,
        UnitType::Slice,
        UnitType::Scope,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            UnitType::Service => "service",
            UnitType::Socket => "socket",
            UnitType::Target => "target",
            UnitType::Device => "device",
            UnitType::Mount => "mount",
            UnitType::Automount => "automount",
            UnitType::Timer => "timer",
            UnitType::Swap => "swap",
            UnitType::Path => "path",
            UnitType::Slice => "slice",
            UnitType::Scope => "scope",
            UnitType::Unknown => "unknown",
        }
    }

    /// Exact, case-sensitive tag lookup. Anything else maps to `Unknown`.
    pub fn from_tag(tag: &str) -> UnitType {
        UnitType::ALL
            .into_iter()
            .find(|t| t.as_str() == tag)
            .unwrap_or(UnitType::Unknown)
    }

    pub fn is_known(self) -> bool {
        self != UnitType::Unknown
    }
}

impl fmt::Display for UnitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static description of a unit type.
#[derive(Debug, Serialize)]
pub struct UnitTypeInfo {
    pub unit_type: UnitType,
    pub display_name: &'static str,
    pub description: &'static str,
    pub doc_key: &'static str,
    pub examples: &'static [&'static str],
}

static UNIT_TYPE_INFO: [UnitTypeInfo; 12] = [
    UnitTypeInfo {
        unit_type: UnitType::Service,
        display_name: "Service Unit",
        description: "Controls a daemon or process and how it is started, stopped and restarted.",
        doc_key: "systemd.service",
        examples: &["nginx.service", "my-app.service"],
    },
    UnitTypeInfo {
        unit_type: UnitType::Socket,
        display_name: "Socket Unit",
        description: "Describes an IPC or network socket used for socket-based activation.",
        doc_key: "systemd.socket",
        examples: &["sshd.socket", "my-app.socket"],
    },
    UnitTypeInfo {
        unit_type: UnitType::Target,
        display_name: "Target Unit",
        description: "Groups units together and provides well-known synchronization points.",
        doc_key: "systemd.target",
        examples: &["multi-user.target", "network-online.target"],
    },
    UnitTypeInfo {
        unit_type: UnitType::Device,
        display_name: "Device Unit",
        description: "Exposes a kernel device tagged by udev to systemd.",
        doc_key: "systemd.device",
        examples: &["dev-sda.device"],
    },
    UnitTypeInfo {
        unit_type: UnitType::Mount,
        display_name: "Mount Unit",
        description: "Controls a file system mount point.",
        doc_key: "systemd.mount",
        examples: &["home.mount", "mnt-data.mount"],
    },
    UnitTypeInfo {
        unit_type: UnitType::Automount,
        display_name: "Automount Unit",
        description: "Mounts a file system on demand when its mount point is accessed.",
        doc_key: "systemd.automount",
        examples: &["mnt-data.automount"],
    },
    UnitTypeInfo {
        unit_type: UnitType::Timer,
        display_name: "Timer Unit",
        description: "Activates another unit on a calendar or monotonic schedule.",
        doc_key: "systemd.timer",
        examples: &["backup.timer", "cleanup.timer"],
    },
    UnitTypeInfo {
        unit_type: UnitType::Swap,
        display_name: "Swap Unit",
        description: "Controls a swap device or swap file.",
        doc_key: "systemd.swap",
        examples: &["swapfile.swap"],
    },
    UnitTypeInfo {
        unit_type: UnitType::Path,
        display_name: "Path Unit",
        description: "Activates another unit when a file system path changes.",
        doc_key: "systemd.path",
        examples: &["watch.path"],
    },
    UnitTypeInfo {
        unit_type: UnitType::Slice,
        display_name: "Slice Unit",
        description: "Groups processes into a node of the cgroup resource tree.",
        doc_key: "systemd.slice",
        examples: &["user.slice", "system-batch.slice"],
    },
    UnitTypeInfo {
        unit_type: UnitType::Scope,
        display_name: "Scope Unit",
        description: "Manages externally created processes; created at runtime, not from files.",
        doc_key: "systemd.scope",
        examples: &["session-1.scope"],
    },
    UnitTypeInfo {
        unit_type: UnitType::Unknown,
        display_name: "Unknown Unit",
        description: "The filename does not end in a recognized unit extension.",
        doc_key: "systemd.unit",
        examples: &[],
    },
];

pub fn unit_type_table() -> &'static [UnitTypeInfo] {
    &UNIT_TYPE_INFO
}

pub fn unit_type_info(unit_type: UnitType) -> &'static UnitTypeInfo {
    UNIT_TYPE_INFO
        .iter()
        .find(|i| i.unit_type == unit_type)
        .unwrap_or(&UNIT_TYPE_INFO[UNIT_TYPE_INFO.len() - 1])
}
