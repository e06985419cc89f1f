use std::{
    io::{BufRead, Write},
    path::Path,
};

use crate::{
    config::Settings,
    console::Console,
    draw::{DrawError, DrawEvent, DrawLog, ListDraw, RangeDraw},
    menu::MainCommand,
    random::Roller,
};

mod list_mode;
mod range_mode;

/// One interactive session: the top-level menu and the two mode loops.
///
/// The session owns both controllers and the random source. Each
/// operation mutates a controller, records a [`DrawEvent`], and then
/// renders the result through the [`Console`].
pub struct App<R, W> {
    console: Console<R, W>,
    roller: Roller,
    /// Drives the reel animation only, so showing or skipping it never
    /// changes the drawn values.
    reel: Roller,
    list: ListDraw,
    range: RangeDraw,
    log: DrawLog,
    notice: Option<String>,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(settings: &Settings, input: R, output: W) -> Self {
        let mut roller = Roller::from_policy(settings.seed);
        let reel = roller.fork();

        let mut app = Self {
            console: Console::new(input, output, settings),
            roller,
            reel,
            list: ListDraw::new(),
            range: RangeDraw::new(),
            log: DrawLog::default(),
            notice: None,
        };

        if let Some(path) = &settings.roster {
            app.preload_roster(path);
        }

        app
    }

    /// Loads names into Mode A before the session starts. A failure is
    /// shown on the first screen instead of aborting.
    pub fn preload_roster(&mut self, path: &Path) {
        match self.list.load_file(path) {
            Ok(summary) => self.log.log(DrawEvent::NamesLoaded {
                accepted: summary.accepted,
                added: summary.added,
            }),
            Err(err) => {
                log::warn!("Could not preload roster: {err}");
                self.notice = Some(format!("❌ {err}"));
            }
        }
    }

    pub fn run(&mut self) -> anyhow::Result<()> {
        loop {
            self.console
                .header("Main menu", Some("Choose a draw mode"))?;
            if let Some(notice) = self.notice.take() {
                self.console.error(&notice)?;
                self.console.plain("")?;
            }

            let Some(input) = self.console.choose(MainCommand::ITEMS)? else {
                break;
            };

            match MainCommand::parse(&input) {
                MainCommand::ListMode => self.list_mode()?,
                MainCommand::RangeMode => self.range_mode()?,
                MainCommand::Exit => break,
                MainCommand::Invalid(choice) => self.invalid_choice(&choice)?,
            }
        }

        self.console.plain("")?;
        self.console.success(&format!(
            "Goodbye. {} draws this session.",
            self.log.draws()
        ))?;
        Ok(())
    }

    fn record(&mut self, event: DrawEvent) {
        self.log.log(event);
    }

    fn report(&mut self, err: &DrawError) -> anyhow::Result<()> {
        log::warn!("{err}");
        self.console.error(&format!("❌ {err}"))?;
        Ok(())
    }

    fn invalid_choice(&mut self, choice: &str) -> anyhow::Result<()> {
        log::warn!("Invalid menu choice {choice:?}");
        self.console.error("Invalid option.")?;
        self.console.pause()?;
        Ok(())
    }

    pub fn list(&self) -> &ListDraw {
        &self.list
    }

    pub fn range(&self) -> &RangeDraw {
        &self.range
    }

    pub fn log(&self) -> &DrawLog {
        &self.log
    }

    pub fn output(&self) -> &W {
        self.console.output()
    }
}
