use std::io::{BufRead, Write};

use crate::{
    app::App,
    console::Reel,
    draw::{DrawError, DrawEvent},
    menu::{RangeCommand, yes_no},
};

impl<R: BufRead, W: Write> App<R, W> {
    pub(super) fn range_mode(&mut self) -> anyhow::Result<()> {
        loop {
            self.console.header(
                "Mode B: range draw (1 to N)",
                Some("No-repeat can be toggled; reset at any time"),
            )?;
            let status = self.range.status();
            let remaining = status
                .remaining
                .map_or_else(|| "-".to_string(), |n| n.to_string());
            self.console.status_bar(
                &format!(
                    "N={} / No-repeat={} / Available={} / Drawn={}",
                    status.bound,
                    yes_no(status.no_repeat),
                    remaining,
                    status.drawn
                ),
                "Mode B",
            )?;

            let items = RangeCommand::items(status.no_repeat);
            let Some(input) = self.console.choose(&items)? else {
                return Ok(());
            };

            match RangeCommand::parse(&input) {
                RangeCommand::SetBound => self.set_bound()?,
                RangeCommand::ToggleNoRepeat => self.toggle_no_repeat()?,
                RangeCommand::Draw => self.draw_number()?,
                RangeCommand::ShowHistory => self.show_numbers()?,
                RangeCommand::Reset => self.reset_range()?,
                RangeCommand::Back => return Ok(()),
                RangeCommand::Invalid(choice) => self.invalid_choice(&choice)?,
            }
        }
    }

    fn set_bound(&mut self) -> anyhow::Result<()> {
        self.console
            .header("Set N", Some("e.g. 50 draws from 1 to 50"))?;
        let Some(input) = self.console.prompt("N: ")? else {
            return Ok(());
        };

        let Ok(n) = input.trim().parse::<i64>() else {
            log::warn!("Bound {input:?} is not a number");
            self.console
                .error(&format!("\n`{}` is not a whole number.", input.trim()))?;
            self.console.pause()?;
            return Ok(());
        };

        match self.range.set_bound(n) {
            Ok(bound) => {
                self.record(DrawEvent::BoundSet { bound });
                self.console.success(&format!("\n✅ N set to {bound}"))?;
            }
            Err(err) => self.report(&err)?,
        }
        self.console.pause()?;
        Ok(())
    }

    fn toggle_no_repeat(&mut self) -> anyhow::Result<()> {
        let enabled = self.range.toggle_no_repeat();
        self.record(DrawEvent::NoRepeatToggled { enabled });
        self.console
            .success(&format!("\nNo-repeat is now: {}", yes_no(enabled)))?;
        self.console.pause()?;
        Ok(())
    }

    fn draw_number(&mut self) -> anyhow::Result<()> {
        let exhausted = self.range.remaining() == Some(0);
        if let Some(bound) = self.range.bound().filter(|_| !exhausted) {
            let reel = &mut self.reel;
            self.console
                .reel(Reel::NUMBERS, || reel.roll(1, bound).to_string())?;
        }

        match self.range.draw_one(&mut self.roller) {
            Ok(value) => {
                let remaining = self.range.remaining();
                let subtitle = if remaining.is_some() {
                    "Congratulations!"
                } else {
                    "Repeats are allowed in this mode"
                };
                self.console.header("Draw result", Some(subtitle))?;
                self.console.result("Drawn number", value)?;
                if let Some(remaining) = remaining {
                    self.console.plain(&format!("Remaining: {remaining}"))?;
                }
                self.record(DrawEvent::NumberDrawn { value, remaining });
            }
            Err(err) => {
                let subtitle = match err {
                    DrawError::Unconfigured => "Set N first",
                    _ => "The pool is empty; reset or turn off no-repeat",
                };
                self.console.header("Draw once", Some(subtitle))?;
                self.report(&err)?;
            }
        }
        self.console.pause()?;
        Ok(())
    }

    fn show_numbers(&mut self) -> anyhow::Result<()> {
        self.console.header(
            "Drawn numbers",
            Some("Smallest first; the draw order is kept"),
        )?;
        let sorted = self.range.sorted_history();
        if sorted.is_empty() {
            self.console.note("(nothing drawn yet)")?;
        } else {
            let joined = sorted
                .iter()
                .map(u32::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            self.console.plain(&joined)?;
        }
        self.console.pause()?;
        Ok(())
    }

    fn reset_range(&mut self) -> anyhow::Result<()> {
        if self.range.reset() {
            let status = self.range.status();
            self.record(DrawEvent::RangeReset {
                bound: status.bound,
            });
            self.console
                .header("Reset complete", Some("Drawn numbers cleared, pool rebuilt"))?;
            let remaining = status
                .remaining
                .map_or_else(|| "-".to_string(), |n| n.to_string());
            self.console
                .success(&format!("N={} / Available={remaining}", status.bound))?;
        } else {
            self.console.header("Reset", Some("Set N first"))?;
            self.console.note("Nothing to reset; N is not set.")?;
        }
        self.console.pause()?;
        Ok(())
    }
}
