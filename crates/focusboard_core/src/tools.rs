//! Registry of the views offered by the application shell.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tool {
    pub name: &'static str,
    /// Route segment, unique across the registry.
    pub route: &'static str,
    pub description: &'static str,
}

pub const TOOLS: &[Tool] = &[
    Tool {
        name: "Eisenhower Matrix",
        route: "eisenhower",
        description: "Prioritize tasks based on importance and urgency",
    },
    Tool {
        name: "Calendar",
        route: "calendar",
        description: "View and manage tasks in a calendar view",
    },
    Tool {
        name: "Kanban Board",
        route: "kanban",
        description: "Organize tasks in a kanban board",
    },
    Tool {
        name: "Time Tracking",
        route: "time-tracking",
        description: "Track time spent on tasks and view reports",
    },
];

pub fn find_tool(route: &str) -> Option<&'static Tool> {
    TOOLS.iter().find(|tool| tool.route == route)
}
