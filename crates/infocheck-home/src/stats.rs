//! Landing page statistics.

use crate::countup::{format_pt_br, CountUpDisplay, CountUpFrame};
use futures::future::join_all;
use infocheck_core::StatsConfig;

/// A headline number on the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Statistic {
    /// Caption under the number
    pub label: &'static str,
    /// Value the counter animates to
    pub target: u64,
    /// Text appended to the number (e.g. `%`)
    pub suffix: &'static str,
}

impl Statistic {
    /// Render a displayed value with grouping and suffix.
    #[must_use]
    pub fn render(&self, value: u64) -> String {
        format!("{}{}", format_pt_br(value), self.suffix)
    }
}

/// The statistics shown in the hero section.
pub const HOME_STATISTICS: [Statistic; 3] = [
    Statistic {
        label: "Tentativas/Hora",
        target: 4678,
        suffix: "",
    },
    Statistic {
        label: "Tentativas/Dia",
        target: 112_272,
        suffix: "",
    },
    Statistic {
        label: "Precisão",
        target: 98,
        suffix: "%",
    },
];

/// Running counters for a set of statistics.
///
/// Dropping the panel stops every counter.
pub struct StatisticsPanel {
    counters: Vec<(Statistic, CountUpDisplay)>,
}

impl StatisticsPanel {
    /// Start one counter per statistic.
    ///
    /// Must be called from within a Tokio runtime.
    #[must_use]
    pub fn start(statistics: &[Statistic], config: &StatsConfig) -> Self {
        let counters = statistics
            .iter()
            .map(|stat| {
                let display =
                    CountUpDisplay::start(stat.target, config.duration_secs, config.tick_rate_hz);
                (*stat, display)
            })
            .collect();
        Self { counters }
    }

    /// Current frame of every counter, in display order.
    #[must_use]
    pub fn frames(&self) -> Vec<(Statistic, CountUpFrame)> {
        self.counters
            .iter()
            .map(|(stat, display)| (*stat, display.frame()))
            .collect()
    }

    /// `"<value> <label>"` lines for the current frames.
    #[must_use]
    pub fn render(&self) -> Vec<String> {
        self.frames()
            .into_iter()
            .map(|(stat, frame)| format!("{} {}", stat.render(frame.value), stat.label))
            .collect()
    }

    /// Wait until every counter has reached its target.
    pub async fn finished(&self) {
        join_all(self.counters.iter().map(|(_, display)| display.finished())).await;
    }
}
