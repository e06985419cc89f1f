use std::{
    io::{BufRead, Write},
    path::PathBuf,
};

use crate::{
    app::App,
    console::Reel,
    draw::{DrawEvent, ListView},
    menu::{InspectCommand, ListCommand},
};

fn empty_placeholder(view: ListView) -> &'static str {
    match view {
        ListView::All => "(no names yet)",
        ListView::Remaining => "(the pool is empty)",
        ListView::Drawn => "(nobody drawn yet)",
    }
}

impl<R: BufRead, W: Write> App<R, W> {
    pub(super) fn list_mode(&mut self) -> anyhow::Result<()> {
        loop {
            self.console.header(
                "Mode A: list draw (no repeats)",
                Some("Enter or load names; drawn names leave the pool"),
            )?;
            let status = self.list.status();
            self.console.status_bar(
                &format!(
                    "Total {} / Available {} / Drawn {}",
                    status.total, status.remaining, status.drawn
                ),
                "Mode A",
            )?;

            let Some(input) = self.console.choose(ListCommand::ITEMS)? else {
                return Ok(());
            };

            match ListCommand::parse(&input) {
                ListCommand::ManualEntry => self.enter_names()?,
                ListCommand::LoadFile => self.load_names()?,
                ListCommand::Draw => self.draw_name()?,
                ListCommand::Inspect => self.inspect_names()?,
                ListCommand::Reset => self.reset_names()?,
                ListCommand::Export => self.export_names()?,
                ListCommand::Back => return Ok(()),
                ListCommand::Invalid(choice) => self.invalid_choice(&choice)?,
            }
        }
    }

    fn enter_names(&mut self) -> anyhow::Result<()> {
        self.console.header(
            "Enter names",
            Some("One name per line; an empty line finishes"),
        )?;

        let mut lines = Vec::new();
        while let Some(line) = self.console.prompt("> ")? {
            if line.trim().is_empty() {
                break;
            }
            lines.push(line);
        }

        let summary = self.list.load(&lines);
        self.record(DrawEvent::NamesLoaded {
            accepted: summary.accepted,
            added: summary.added,
        });
        self.console.success(&format!(
            "\nAdded {} names ({} new); {} available to draw.",
            summary.accepted, summary.added, summary.pool_len
        ))?;
        self.console.pause()?;
        Ok(())
    }

    fn load_names(&mut self) -> anyhow::Result<()> {
        self.console.header(
            "Load names from a file",
            Some("One name per line, e.g. names.txt"),
        )?;
        let Some(path) = self.console.prompt("File path: ")? else {
            return Ok(());
        };
        let path = PathBuf::from(path.trim());

        match self.list.load_file(&path) {
            Ok(summary) => {
                self.record(DrawEvent::NamesLoaded {
                    accepted: summary.accepted,
                    added: summary.added,
                });
                self.console.success(&format!(
                    "\nLoaded {} names ({} new); {} available to draw.",
                    summary.accepted, summary.added, summary.pool_len
                ))?;
            }
            Err(err) => self.report(&err)?,
        }
        self.console.pause()?;
        Ok(())
    }

    fn draw_name(&mut self) -> anyhow::Result<()> {
        let pool = self.list.remaining();
        if !pool.is_empty() {
            let reel = &mut self.reel;
            self.console.reel(Reel::NAMES, || {
                reel.index(pool.len())
                    .map(|idx| pool[idx].clone())
                    .unwrap_or_default()
            })?;
        }

        match self.list.draw_one(&mut self.roller) {
            Ok(name) => {
                let remaining = self.list.remaining().len();
                self.console.header("Draw result", Some("Congratulations!"))?;
                self.console.result("Drawn", &name)?;
                self.console.plain(&format!("Remaining: {remaining}"))?;
                self.record(DrawEvent::NameDrawn { name, remaining });
            }
            Err(err) => {
                self.console.header(
                    "Draw one",
                    Some("The pool is empty; add names or reset first"),
                )?;
                self.report(&err)?;
            }
        }
        self.console.pause()?;
        Ok(())
    }

    fn inspect_names(&mut self) -> anyhow::Result<()> {
        self.console
            .header("View names", Some("All / remaining / drawn"))?;
        let Some(input) = self.console.choose(InspectCommand::ITEMS)? else {
            return Ok(());
        };

        match InspectCommand::parse(&input) {
            InspectCommand::View(view) => {
                self.console
                    .numbered_list(self.list.view(view), empty_placeholder(view))?;
                self.record(DrawEvent::ListInspected { view });
                self.console.pause()?;
            }
            InspectCommand::Back => {}
            InspectCommand::Invalid(choice) => self.invalid_choice(&choice)?,
        }
        Ok(())
    }

    fn reset_names(&mut self) -> anyhow::Result<()> {
        self.list.reset();
        let pool = self.list.remaining().len();
        self.record(DrawEvent::ListReset { pool });

        self.console
            .header("Reset complete", Some("Drawn names are back in the pool"))?;
        self.console.success(&format!("Available: {pool}"))?;
        self.console.pause()?;
        Ok(())
    }

    fn export_names(&mut self) -> anyhow::Result<()> {
        self.console
            .header("Export drawn names", Some("CSV rows: index,name"))?;
        let Some(path) = self.console.prompt("Output file (e.g. result.csv): ")? else {
            return Ok(());
        };
        let path = PathBuf::from(path.trim());

        match self.list.export_history(&path) {
            Ok(rows) => {
                self.console.success(&format!(
                    "\n✅ Wrote {rows} rows to {} (empty file if nothing was drawn)",
                    path.display()
                ))?;
                self.record(DrawEvent::HistoryExported { path, rows });
            }
            Err(err) => self.report(&err)?,
        }
        self.console.pause()?;
        Ok(())
    }
}
