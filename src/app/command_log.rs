//! Diagnose-Protokoll der ausgeführten Commands.
//!
//! Aufeinanderfolgende Drag-Updates werden zu einem Eintrag zusammengefasst:
//! ein kompletter Drag belegt höchstens drei Einträge (Begin, Update, End).

use super::AppCommand;
use std::collections::VecDeque;

/// Zähler pro Command-Art seit Sessionstart
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommandSummary {
    pub points_added: usize,
    pub drags_started: usize,
    /// Einzelne Pointer-Moves während eines Drags (nicht zusammengefasst)
    pub drag_updates: usize,
    pub drags_ended: usize,
}

/// Letzte Commands (begrenzt) plus Gesamtzähler.
#[derive(Default)]
pub struct CommandLog {
    recent: VecDeque<AppCommand>,
    summary: CommandSummary,
}

impl CommandLog {
    const RECENT_CAPACITY: usize = 64;

    /// Erstellt ein leeres Command-Log.
    pub fn new() -> Self {
        Self {
            recent: VecDeque::with_capacity(Self::RECENT_CAPACITY),
            summary: CommandSummary::default(),
        }
    }

    /// Zählt den Command und nimmt ihn in die Historie auf.
    pub fn record(&mut self, command: &AppCommand) {
        match command {
            AppCommand::AddPoint { .. } => self.summary.points_added += 1,
            AppCommand::BeginPointDrag { point_id, .. } => {
                self.summary.drags_started += 1;
                log::debug!("Command: Drag-Start Punkt {}", point_id.0);
            }
            AppCommand::UpdatePointDrag { .. } => self.summary.drag_updates += 1,
            AppCommand::EndPointDrag => self.summary.drags_ended += 1,
            AppCommand::RequestExit => {}
        }

        if matches!(command, AppCommand::UpdatePointDrag { .. }) {
            if let Some(last) = self.recent.back_mut() {
                if matches!(last, AppCommand::UpdatePointDrag { .. }) {
                    *last = command.clone();
                    return;
                }
            }
        }

        if self.recent.len() >= Self::RECENT_CAPACITY {
            self.recent.pop_front();
        }
        self.recent.push_back(command.clone());
    }

    /// Anzahl Einträge in der Historie.
    pub fn len(&self) -> usize {
        self.recent.len()
    }

    /// Gibt `true` zurück, wenn noch kein Command ausgeführt wurde.
    pub fn is_empty(&self) -> bool {
        self.recent.is_empty()
    }

    /// Zuletzt ausgeführter Command.
    pub fn last(&self) -> Option<&AppCommand> {
        self.recent.back()
    }

    /// Historie, älteste zuerst.
    pub fn recent(&self) -> impl Iterator<Item = &AppCommand> {
        self.recent.iter()
    }

    /// Gesamtzähler seit Sessionstart.
    pub fn summary(&self) -> CommandSummary {
        self.summary
    }
}
