//! Numbered menus and the commands they map to.
//!
//! Every menu parses into its own enum. Anything that is not one of the
//! listed numbers becomes `Invalid` with the raw input.

use crate::draw::ListView;

/// Reads the first whitespace-separated token as a menu number.
fn parse_choice(input: &str) -> Option<u32> {
    input.split_whitespace().next()?.parse().ok()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MainCommand {
    ListMode,
    RangeMode,
    Exit,
    Invalid(String),
}

impl MainCommand {
    pub const ITEMS: &'static [&'static str] = &[
        "1) Mode A: draw names from a list (no repeats, load from file, export)",
        "2) Mode B: draw numbers from 1..N (no-repeat can be toggled)",
        "0) Exit",
    ];

    pub fn parse(input: &str) -> Self {
        match parse_choice(input) {
            Some(1) => MainCommand::ListMode,
            Some(2) => MainCommand::RangeMode,
            Some(0) => MainCommand::Exit,
            _ => MainCommand::Invalid(input.trim().to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListCommand {
    ManualEntry,
    LoadFile,
    Draw,
    Inspect,
    Reset,
    Export,
    Back,
    Invalid(String),
}

impl ListCommand {
    pub const ITEMS: &'static [&'static str] = &[
        "1) Enter names by hand (one per line, empty line to finish)",
        "2) Load names from a file (one name per line)",
        "3) Draw one name (no repeats)",
        "4) View names (all / remaining / drawn)",
        "5) Reset the draw (put drawn names back)",
        "6) Export drawn names (CSV)",
        "0) Back to main menu",
    ];

    pub fn parse(input: &str) -> Self {
        match parse_choice(input) {
            Some(1) => ListCommand::ManualEntry,
            Some(2) => ListCommand::LoadFile,
            Some(3) => ListCommand::Draw,
            Some(4) => ListCommand::Inspect,
            Some(5) => ListCommand::Reset,
            Some(6) => ListCommand::Export,
            Some(0) => ListCommand::Back,
            _ => ListCommand::Invalid(input.trim().to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InspectCommand {
    View(ListView),
    Back,
    Invalid(String),
}

impl InspectCommand {
    pub const ITEMS: &'static [&'static str] = &[
        "1) All names",
        "2) Remaining names",
        "3) Drawn names",
        "0) Back",
    ];

    pub fn parse(input: &str) -> Self {
        match parse_choice(input) {
            Some(1) => InspectCommand::View(ListView::All),
            Some(2) => InspectCommand::View(ListView::Remaining),
            Some(3) => InspectCommand::View(ListView::Drawn),
            Some(0) => InspectCommand::Back,
            _ => InspectCommand::Invalid(input.trim().to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeCommand {
    SetBound,
    ToggleNoRepeat,
    Draw,
    ShowHistory,
    Reset,
    Back,
    Invalid(String),
}

impl RangeCommand {
    /// The toggle entry shows the current setting, so the items are built
    /// per render.
    pub fn items(no_repeat: bool) -> Vec<String> {
        vec![
            "1) Set N".to_string(),
            format!("2) Toggle no-repeat (now: {})", yes_no(no_repeat)),
            "3) Draw once".to_string(),
            "4) Show drawn numbers".to_string(),
            "5) Reset (clear drawn, rebuild pool)".to_string(),
            "0) Back to main menu".to_string(),
        ]
    }

    pub fn parse(input: &str) -> Self {
        match parse_choice(input) {
            Some(1) => RangeCommand::SetBound,
            Some(2) => RangeCommand::ToggleNoRepeat,
            Some(3) => RangeCommand::Draw,
            Some(4) => RangeCommand::ShowHistory,
            Some(5) => RangeCommand::Reset,
            Some(0) => RangeCommand::Back,
            _ => RangeCommand::Invalid(input.trim().to_string()),
        }
    }
}

pub fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}
