use crate::domain::unit_type::UnitType;
use serde::Serialize;

/// A unit-file section and the directives offered for it.
#[derive(Debug, Serialize)]
pub struct SectionTemplate {
    pub name: &'static str,
    pub directives: &'static [&'static str],
}

/// Read-only lookup tables handed to the session and display code.
#[derive(Debug)]
pub struct Catalog {
    pub sections: &'static [SectionTemplate],
    pub help: &'static [(&'static str, &'static str)],
}

static SECTIONS: [SectionTemplate; 6] = [
    SectionTemplate {
        name: "Unit",
        directives: &[
            "Description",
            "Documentation",
            "Requires",
            "Wants",
            "Before",
            "After",
            "ConditionPathExists",
        ],
    },
    SectionTemplate {
        name: "Service",
        directives: &[
            "Type",
            "ExecStart",
            "ExecStartPre",
            "ExecStartPost",
            "ExecStop",
            "ExecReload",
            "Restart",
            "RestartSec",
            "User",
            "Group",
            "WorkingDirectory",
            "Environment",
            "EnvironmentFile",
        ],
    },
    SectionTemplate {
        name: "Install",
        directives: &["WantedBy", "RequiredBy", "Alias"],
    },
    SectionTemplate {
        name: "Socket",
        directives: &["ListenStream", "ListenDatagram", "Service"],
    },
    SectionTemplate {
        name: "Timer",
        directives: &["OnCalendar", "OnUnitActiveSec", "OnBootSec", "Unit"],
    },
    SectionTemplate {
        name: "Path",
        directives: &["PathExists", "PathChanged", "Unit"],
    },
];

static HELP: [(&str, &str); 36] = [
    ("Description", "Human readable name of the unit, shown in status output."),
    ("Documentation", "Space-separated list of URIs referencing documentation for the unit."),
    ("Requires", "Hard dependencies; if one of these fails to start this unit is stopped too."),
    ("Wants", "Weak dependencies; listed units are started but failures are tolerated."),
    ("Before", "Ordering: this unit is started before the listed units."),
    ("After", "Ordering: this unit is started after the listed units."),
    ("ConditionPathExists", "Skip starting the unit unless the given absolute path exists."),
    ("Type", "Process start-up type: simple, exec, forking, oneshot, dbus, notify or idle."),
    ("ExecStart", "Command with its arguments executed when the service is started. Must be an absolute path."),
    ("ExecStartPre", "Commands executed before ExecStart."),
    ("ExecStartPost", "Commands executed after ExecStart."),
    ("ExecStop", "Commands executed to stop the service."),
    ("ExecReload", "Commands executed to trigger a configuration reload."),
    ("Restart", "When to restart the service: no, on-success, on-failure, on-abnormal, on-watchdog, on-abort or always."),
    ("RestartSec", "Time to sleep before restarting the service."),
    ("User", "User the processes are executed as."),
    ("Group", "Group the processes are executed as."),
    ("WorkingDirectory", "Working directory for executed processes."),
    ("Environment", "Environment variables for executed processes, as KEY=value assignments."),
    ("EnvironmentFile", "File to read environment variables from."),
    ("WantedBy", "Adds a Wants= dependency from the listed units when this unit is enabled."),
    ("RequiredBy", "Adds a Requires= dependency from the listed units when this unit is enabled."),
    ("Alias", "Additional names this unit is installed under when enabled."),
    ("ListenStream", "Address to listen on for a stream socket: a port number, an address:port pair or a socket path."),
    ("ListenDatagram", "Address to listen on for a datagram socket."),
    ("Service", "Service unit to activate on incoming traffic; defaults to the socket's name."),
    ("OnCalendar", "Calendar event expression that triggers the unit, e.g. daily or Mon *-*-* 04:00."),
    ("OnUnitActiveSec", "Trigger the unit this long after it was last activated."),
    ("OnBootSec", "Trigger the unit this long after the machine booted."),
    ("Unit", "Unit to activate when this timer or path unit elapses; defaults to the same name with .service."),
    ("PathExists", "Activate the unit when the given path exists."),
    ("PathChanged", "Activate the unit when the given file is written and closed."),
    ("RestartPreventExitStatus", "Exit statuses that prevent automatic restart."),
    ("KillMode", "How processes of this unit are killed: control-group, mixed, process or none."),
    ("TimeoutStartSec", "Time to wait for start-up before the unit is considered failed."),
    ("Persistent", "Catch up on timer runs missed while the system was down."),
];

static BUILTIN: Catalog = Catalog {
    sections: &SECTIONS,
    help: &HELP,
};

impl Catalog {
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    pub fn section_names(&self) -> Vec<&'static str> {
        self.sections.iter().map(|s| s.name).collect()
    }

    pub fn section(&self, name: &str) -> Option<&'static SectionTemplate> {
        self.sections.iter().find(|s| s.name == name)
    }

    pub fn directives(&self, section: &str) -> Option<&'static [&'static str]> {
        self.section(section).map(|s| s.directives)
    }

    pub fn has_directive(&self, section: &str, directive: &str) -> bool {
        self.directives(section)
            .map(|d| d.contains(&directive))
            .unwrap_or(false)
    }

    pub fn help(&self, directive: &str) -> Option<&'static str> {
        self.help
            .iter()
            .find(|(name, _)| *name == directive)
            .map(|(_, text)| *text)
    }

    /// Section that carries the type-specific directives of a unit type.
    pub fn primary_section(&self, unit_type: UnitType) -> Option<&'static SectionTemplate> {
        let name = match unit_type {
            UnitType::Service => "Service",
            UnitType::Socket => "Socket",
            UnitType::Timer => "Timer",
            UnitType::Path => "Path",
            _ => return None,
        };
        self.section(name)
    }
}
