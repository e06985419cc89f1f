pub mod app;
pub mod config;
pub mod console;
pub mod draw;
pub mod menu;
pub mod random;
pub mod roster;

pub mod prelude {
    pub use crate::{
        app::App,
        config::{SeedPolicy, Settings},
        draw::{
            DrawError, DrawEvent, DrawLog, ListDraw, ListStatus, ListView, LoadSummary, RangeDraw,
            RangeState, RangeStatus,
        },
        random::Roller,
    };
}
