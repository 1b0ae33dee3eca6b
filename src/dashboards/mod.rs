//! Dashboard definitions: datasets, tab sets and the blocks each tab shows.
//!
//! Every dashboard is self-contained. Its data are `'static` literals and its
//! only mutable state is the active tab held in a [`ViewState`].

pub mod european_rearmament;
pub mod ifi_exposure;
pub mod peace_impact;
pub mod trade_vulnerability;
pub mod trade_war;

use crate::error::DashboardError;
use std::fmt::{Debug, Display};
use std::str::FromStr;

/// Closed set of tabs belonging to one dashboard.
pub trait TabSet: Copy + Eq + Debug + Display + FromStr + 'static {
    /// Tabs in declaration order. The first one is the initial tab.
    const ALL: &'static [Self];

    /// Human readable tab caption.
    fn title(self) -> &'static str;
}

/// Holds the active tab of a dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState<T: TabSet> {
    active: T,
}

impl<T: TabSet> Default for ViewState<T> {
    fn default() -> Self {
        Self { active: T::ALL[0] }
    }
}

impl<T: TabSet> ViewState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> T {
        self.active
    }

    /// Makes `tab` the active tab.
    pub fn select(&mut self, tab: T) {
        self.active = tab;
    }

    /// Position of the active tab in [`TabSet::ALL`].
    pub fn index(&self) -> usize {
        T::ALL
            .iter()
            .position(|tab| *tab == self.active)
            .unwrap_or_default()
    }

    /// Selects the tab at `index`. Out-of-range indices leave the state as is.
    pub fn select_index(&mut self, index: usize) -> bool {
        match T::ALL.get(index) {
            Some(tab) => {
                self.active = *tab;
                true
            }
            None => false,
        }
    }

    /// Cycles forward to the next tab.
    pub fn next(&mut self) {
        let next = (self.index() + 1) % T::ALL.len();
        self.active = T::ALL[next];
    }

    /// Cycles back to the previous tab.
    pub fn previous(&mut self) {
        let len = T::ALL.len();
        let previous = (self.index() + len - 1) % len;
        self.active = T::ALL[previous];
    }
}

/// The five dashboards, named as on the command line.
#[derive(
    Debug,
    Copy,
    Clone,
    Default,
    PartialEq,
    Eq,
    Hash,
    serde::Serialize,
    serde::Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum DashboardKind {
    #[default]
    TradeVulnerability,
    TradeWar,
    IfiExposure,
    EuropeanRearmament,
    PeaceImpact,
}

impl DashboardKind {
    pub const ALL: [DashboardKind; 5] = [
        DashboardKind::TradeVulnerability,
        DashboardKind::TradeWar,
        DashboardKind::IfiExposure,
        DashboardKind::EuropeanRearmament,
        DashboardKind::PeaceImpact,
    ];

    pub fn title(self) -> &'static str {
        match self {
            DashboardKind::TradeVulnerability => trade_vulnerability::TITLE,
            DashboardKind::TradeWar => trade_war::TITLE,
            DashboardKind::IfiExposure => ifi_exposure::TITLE,
            DashboardKind::EuropeanRearmament => european_rearmament::TITLE,
            DashboardKind::PeaceImpact => peace_impact::TITLE,
        }
    }

    /// Line shown under the title, for the dashboards that have one.
    pub fn subtitle(self) -> Option<&'static str> {
        match self {
            DashboardKind::TradeVulnerability => Some(trade_vulnerability::SUBTITLE),
            DashboardKind::IfiExposure => Some(ifi_exposure::SUBTITLE),
            _ => None,
        }
    }

    /// Parses a command line dashboard name.
    pub fn parse(name: &str) -> Result<Self, DashboardError> {
        name.parse().map_err(|_| DashboardError::UnknownDashboard {
            name: name.to_string(),
            valid: Self::ALL.iter().map(ToString::to_string).collect(),
        })
    }
}

/// A dashboard together with its own tab state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardView {
    TradeVulnerability(ViewState<trade_vulnerability::Tab>),
    TradeWar(ViewState<trade_war::Tab>),
    IfiExposure(ViewState<ifi_exposure::Tab>),
    EuropeanRearmament(ViewState<european_rearmament::Tab>),
    PeaceImpact(ViewState<peace_impact::Tab>),
}

/// Dispatches `$body` with `$state` bound to the inner `ViewState`.
macro_rules! with_state {
    ($view:expr, $state:ident => $body:expr) => {
        match $view {
            DashboardView::TradeVulnerability($state) => $body,
            DashboardView::TradeWar($state) => $body,
            DashboardView::IfiExposure($state) => $body,
            DashboardView::EuropeanRearmament($state) => $body,
            DashboardView::PeaceImpact($state) => $body,
        }
    };
}

impl DashboardView {
    /// Fresh view of `kind` on its first tab.
    pub fn new(kind: DashboardKind) -> Self {
        match kind {
            DashboardKind::TradeVulnerability => Self::TradeVulnerability(ViewState::new()),
            DashboardKind::TradeWar => Self::TradeWar(ViewState::new()),
            DashboardKind::IfiExposure => Self::IfiExposure(ViewState::new()),
            DashboardKind::EuropeanRearmament => Self::EuropeanRearmament(ViewState::new()),
            DashboardKind::PeaceImpact => Self::PeaceImpact(ViewState::new()),
        }
    }

    pub fn kind(&self) -> DashboardKind {
        match self {
            Self::TradeVulnerability(_) => DashboardKind::TradeVulnerability,
            Self::TradeWar(_) => DashboardKind::TradeWar,
            Self::IfiExposure(_) => DashboardKind::IfiExposure,
            Self::EuropeanRearmament(_) => DashboardKind::EuropeanRearmament,
            Self::PeaceImpact(_) => DashboardKind::PeaceImpact,
        }
    }

    /// Captions of all tabs, in order.
    pub fn tab_titles(&self) -> Vec<&'static str> {
        fn titles<T: TabSet>(_: &ViewState<T>) -> Vec<&'static str> {
            T::ALL.iter().map(|tab| tab.title()).collect()
        }
        with_state!(self, state => titles(state))
    }

    /// Command line names of all tabs, in order.
    pub fn tab_names(&self) -> Vec<String> {
        fn names<T: TabSet>(_: &ViewState<T>) -> Vec<String> {
            T::ALL.iter().map(ToString::to_string).collect()
        }
        with_state!(self, state => names(state))
    }

    pub fn active_index(&self) -> usize {
        with_state!(self, state => state.index())
    }

    pub fn active_title(&self) -> &'static str {
        with_state!(self, state => state.active().title())
    }

    pub fn next_tab(&mut self) {
        with_state!(self, state => state.next())
    }

    pub fn previous_tab(&mut self) {
        with_state!(self, state => state.previous())
    }

    pub fn select_index(&mut self, index: usize) -> bool {
        with_state!(self, state => state.select_index(index))
    }

    /// Selects a tab by its command line name.
    pub fn select_named(&mut self, name: &str) -> Result<(), DashboardError> {
        fn select<T: TabSet>(
            state: &mut ViewState<T>,
            kind: DashboardKind,
            name: &str,
        ) -> Result<(), DashboardError> {
            let tab = name.parse::<T>().map_err(|_| DashboardError::UnknownTab {
                dashboard: kind.to_string(),
                name: name.to_string(),
                valid: T::ALL.iter().map(ToString::to_string).collect(),
            })?;
            state.select(tab);
            Ok(())
        }
        let kind = self.kind();
        with_state!(self, state => select(state, kind, name))
    }
}

/// A named value plotted as a pie slice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slice {
    pub name: &'static str,
    pub value: f64,
}

/// One value per year.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YearPoint {
    pub year: u16,
    pub value: f64,
}

/// Headline figure shown as a summary card.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryCard {
    pub title: &'static str,
    pub value: String,
    pub note: String,
    pub tone: crate::palette::Palette,
}
