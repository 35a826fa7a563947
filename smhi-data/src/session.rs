//! Selection state and fetch sequencing.
//!
//! The `Orchestrator` owns the one active `Selection`. Every transition that
//! needs data hands back a `FetchTicket`; tickets are numbered in the order
//! they were issued so a late response for an old selection can be told apart
//! from the current one.

use crate::chart::ChartSpec;
use crate::compose::{self, compose};
use log::{debug, error};
use smhi_api::{City, ClientError, Period, Selection, TemperaturePayload};

/// User intents, sent from the UI to the selection loop.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    SearchResultSelected(City),
    MajorCitySelected(City),
    PeriodSelected(Period),
    AllCitiesRequested,
}

/// A fetch the UI must run for a given selection.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchTicket {
    seq: u64,
    selection: Selection,
}

/// The result of a ticket, ready for the renderer.
#[derive(Debug, Clone, PartialEq)]
pub enum Settled {
    Chart { seq: u64, spec: ChartSpec },
    Failed { seq: u64, message: String },
}

impl Settled {
    pub fn seq(&self) -> u64 {
        match self {
            Settled::Chart { seq, .. } | Settled::Failed { seq, .. } => *seq,
        }
    }
}

impl FetchTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Turn the fetch outcome into something the renderer can present.
    pub fn settle(&self, result: Result<TemperaturePayload, ClientError>) -> Settled {
        match result {
            Ok(payload) => Settled::Chart {
                seq: self.seq,
                spec: compose(&payload, self.selection.period),
            },
            Err(e) => {
                error!(
                    "Fetch #{} for {} ({}) failed: {:?}",
                    self.seq,
                    self.selection.target_name(),
                    self.selection.period.label(),
                    e
                );
                Settled::Failed {
                    seq: self.seq,
                    message: e.user_message(),
                }
            }
        }
    }
}

/// Session state machine over `(city, period)`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Orchestrator {
    selection: Selection,
    issued: u64,
}

impl Orchestrator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ticket for the initial all-cities view.
    pub fn start(&mut self) -> FetchTicket {
        self.issue()
    }

    /// Choose a city, keeping the active period.
    pub fn select(&mut self, city: City) -> FetchTicket {
        self.selection.city = Some(city);
        self.issue()
    }

    /// Switch period for the selected city.
    ///
    /// Returns `None` without touching state when no city is selected or the
    /// period is already active.
    pub fn set_period(&mut self, period: Period) -> Option<FetchTicket> {
        if self.selection.city.is_none() || self.selection.period == period {
            debug!("Ignoring period change to {:?}", period);
            return None;
        }
        self.selection.period = period;
        Some(self.issue())
    }

    /// Back to the all-cities view with the default period.
    pub fn reset(&mut self) -> FetchTicket {
        self.selection = Selection::all_cities();
        self.issue()
    }

    pub fn handle(&mut self, message: Message) -> Option<FetchTicket> {
        match message {
            Message::SearchResultSelected(city) | Message::MajorCitySelected(city) => {
                Some(self.select(city))
            }
            Message::PeriodSelected(period) => self.set_period(period),
            Message::AllCitiesRequested => Some(self.reset()),
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn period(&self) -> Period {
        self.selection.period
    }

    pub fn title(&self) -> String {
        let city = self.selection.city.as_ref().map(|c| c.name.as_str());
        compose::chart_title(city, self.selection.period)
    }

    fn issue(&mut self) -> FetchTicket {
        self.issued += 1;
        debug!(
            "Issuing fetch #{} for {} ({})",
            self.issued,
            self.selection.target_name(),
            self.selection.period.label()
        );
        FetchTicket {
            seq: self.issued,
            selection: self.selection.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smhi_api::{ApiRoute, SingleCityPayload, FETCH_FAILED_MESSAGE};

    fn stockholm() -> City {
        City::shortcut("Stockholm", 97400)
    }

    #[test]
    fn test_start_targets_all_cities() {
        let mut orchestrator = Orchestrator::new();
        let ticket = orchestrator.start();
        assert_eq!(ticket.seq(), 1);
        assert_eq!(ticket.selection().route(), ApiRoute::AllCities);
        assert_eq!(orchestrator.title(), "Temperature Data for Major Swedish Cities");
    }

    #[test]
    fn test_select_keeps_period() {
        let mut orchestrator = Orchestrator::new();
        orchestrator.select(stockholm());
        orchestrator.set_period(Period::Historical).unwrap();

        let ticket = orchestrator.select(City::shortcut("Malmö", 53430));
        assert_eq!(ticket.selection().period, Period::Historical);
        assert_eq!(ticket.selection().route(), ApiRoute::Historical("Malmö".into()));
        assert_eq!(orchestrator.title(), "Temperature Data for Malmö (Historical)");
    }

    #[test]
    fn test_set_period_without_city_is_noop() {
        let mut orchestrator = Orchestrator::new();
        let before = orchestrator.clone();
        assert_eq!(orchestrator.set_period(Period::Monthly), None);
        assert_eq!(orchestrator, before);
    }

    #[test]
    fn test_set_same_period_is_noop() {
        let mut orchestrator = Orchestrator::new();
        orchestrator.select(stockholm());
        let before = orchestrator.clone();
        assert_eq!(orchestrator.set_period(Period::Recent), None);
        assert_eq!(orchestrator, before);
    }

    #[test]
    fn test_set_period_issues_ticket() {
        let mut orchestrator = Orchestrator::new();
        orchestrator.select(stockholm());
        let ticket = orchestrator.set_period(Period::Monthly).unwrap();
        assert_eq!(ticket.selection().route(), ApiRoute::Monthly("Stockholm".into()));
        assert_eq!(orchestrator.period(), Period::Monthly);
        assert_eq!(orchestrator.title(), "Temperature Data for Stockholm (Last 12 Months)");
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut orchestrator = Orchestrator::new();
        orchestrator.select(stockholm());
        orchestrator.set_period(Period::Historical);
        let ticket = orchestrator.reset();
        assert_eq!(ticket.selection(), &Selection::all_cities());
        assert_eq!(orchestrator.period(), Period::Recent);
        assert_eq!(orchestrator.selection().city, None);
    }

    #[test]
    fn test_sequence_numbers_strictly_increase() {
        let mut orchestrator = Orchestrator::new();
        let messages = [
            Message::MajorCitySelected(stockholm()),
            Message::PeriodSelected(Period::Monthly),
            Message::PeriodSelected(Period::Monthly),
            Message::SearchResultSelected(City::shortcut("Kiruna", 180940)),
            Message::AllCitiesRequested,
        ];
        let mut seqs = vec![orchestrator.start().seq()];
        seqs.extend(
            messages
                .into_iter()
                .filter_map(|m| orchestrator.handle(m))
                .map(|t| t.seq()),
        );
        assert_eq!(seqs, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_settle_success_composes_chart() {
        let mut orchestrator = Orchestrator::new();
        let ticket = orchestrator.select(stockholm());
        let payload = TemperaturePayload::SingleCity(SingleCityPayload {
            months: vec!["Jan".into(), "Feb".into()],
            city: "Stockholm".into(),
            temperatures: vec![Some(-2.8), Some(-3.1)],
            station_name: None,
            station_id: None,
            period: None,
            time_range: None,
        });
        match ticket.settle(Ok(payload)) {
            Settled::Chart { seq, spec } => {
                assert_eq!(seq, ticket.seq());
                assert_eq!(spec.title.lines(), vec![orchestrator.title().as_str()]);
                assert_eq!(spec.x_axis_label, "Month");
            }
            other => panic!("expected chart, got {:?}", other),
        }
    }

    #[test]
    fn test_settle_failure_uses_user_message() {
        let ticket = Orchestrator::new().start();
        let settled = ticket.settle(Err(ClientError::Fetch {
            message: FETCH_FAILED_MESSAGE,
            status: Some(502),
        }));
        assert_eq!(
            settled,
            Settled::Failed {
                seq: 1,
                message: FETCH_FAILED_MESSAGE.to_string()
            }
        );
        assert_eq!(settled.seq(), 1);
    }
}
