use sella_session::{ChangeNotifier, SessionEvent, SessionField, SessionRecord};
use sella_shared::Flight;
use tokio::sync::broadcast;
use tracing::debug;

use crate::classify::{classify, CommandFamily};
use crate::config::TerminalConfig;
use crate::grammar::{agency, availability, contact, name, pricing, printer, retrieve, seat_sell};
use crate::result::{CommandError, CommandPayload, CommandResult, ErrorKind, ErrorPayload};

/// Entry point for the terminal. Normalizes raw input, routes it to the
/// grammar family that claims it, and publishes a change event for every
/// successful mutation so attached panels can refresh.
pub struct CommandInterpreter {
    config: TerminalConfig,
    notifier: ChangeNotifier,
}

impl CommandInterpreter {
    pub fn new(config: TerminalConfig) -> Self {
        Self {
            config,
            notifier: ChangeNotifier::default(),
        }
    }

    pub fn config(&self) -> &TerminalConfig {
        &self.config
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.notifier.subscribe()
    }

    /// Run one terminal entry against the session. Matching happens on the
    /// trimmed uppercase form; the raw string is echoed back in the result
    /// untouched.
    pub fn parse(
        &self,
        session: &mut SessionRecord,
        flights: &[Flight],
        raw: &str,
    ) -> CommandResult {
        let cmd = raw.trim().to_uppercase();
        let had_pnr = session.pnr.is_some();

        let Some(family) = classify(&cmd) else {
            return self.unrecognized(&cmd, raw);
        };
        debug!("classified {:?} as {:?}", cmd, family);

        let outcome = match family {
            CommandFamily::AvailabilityCheck => availability::execute(&cmd, flights),
            CommandFamily::SeatSell => seat_sell::execute(&cmd, flights, session),
            CommandFamily::Wpa => pricing::wpa(session, flights),
            CommandFamily::Wpncb => pricing::wpncb(flights),
            CommandFamily::PriceQuote => pricing::price_quote(session, flights, &self.config),
            CommandFamily::PriceCheck => pricing::price_check(session),
            CommandFamily::NameInsert => name::execute(&cmd, session),
            CommandFamily::AgencyDetails => agency::details(&cmd, session),
            CommandFamily::Ticketing => agency::ticketing(&cmd, session),
            CommandFamily::Received => agency::received(&cmd, session),
            CommandFamily::MobileNumber => contact::mobile(&cmd, session),
            CommandFamily::EmailAddress => contact::email(&cmd, session),
            CommandFamily::DocsInsert => contact::docs(&cmd, session),
            CommandFamily::PrinterDesignate => printer::designate(&cmd, session, &self.config),
            CommandFamily::PrinterConfirm => printer::confirm(&cmd, session),
            CommandFamily::Dsiv => printer::dsiv(&cmd, session),
            CommandFamily::PtrAssign => printer::ptr_assign(&cmd, session),
            CommandFamily::Invoice => printer::invoice(&cmd, session, &self.config),
            CommandFamily::EndRetrieve => Ok(retrieve::pnr_view(session, &self.config, "ER")),
            CommandFamily::IgnoreRetrieve => Ok(retrieve::pnr_view(session, &self.config, "IR")),
            CommandFamily::TicketDetails => Ok(retrieve::ticket_details(session, &self.config)),
            CommandFamily::ClearSegments => Ok(retrieve::clear(session)),
        };

        match outcome {
            Ok(payload) => {
                self.notify(family, had_pnr, session);
                CommandResult::ok(family, raw, payload)
            }
            Err(error) => {
                debug!("{:?} rejected: {}", family, error.message);
                CommandResult::fail(family, raw, error)
            }
        }
    }

    /// Publish the session field a successful command touched. Retrieval
    /// commands only announce the record locator the first time one is
    /// minted.
    fn notify(&self, family: CommandFamily, had_pnr: bool, session: &SessionRecord) {
        let field = match family {
            CommandFamily::SeatSell => Some(SessionField::Bookings),
            CommandFamily::NameInsert => Some(SessionField::PassengerName),
            CommandFamily::AgencyDetails => Some(SessionField::Agency),
            CommandFamily::Ticketing => Some(SessionField::Ticketing),
            CommandFamily::Received => Some(SessionField::Received),
            CommandFamily::MobileNumber => Some(SessionField::Mobile),
            CommandFamily::EmailAddress => Some(SessionField::Email),
            CommandFamily::DocsInsert => Some(SessionField::Docs),
            CommandFamily::PriceQuote => Some(SessionField::FareQuote),
            CommandFamily::PrinterDesignate | CommandFamily::Dsiv | CommandFamily::PtrAssign => {
                Some(SessionField::Printer)
            }
            CommandFamily::PrinterConfirm => Some(SessionField::PrinterConfirm),
            CommandFamily::Invoice => Some(SessionField::TicketNumber),
            CommandFamily::EndRetrieve
            | CommandFamily::IgnoreRetrieve
            | CommandFamily::TicketDetails => {
                if !had_pnr && session.pnr.is_some() {
                    Some(SessionField::Pnr)
                } else {
                    None
                }
            }
            CommandFamily::ClearSegments => {
                self.notifier.publish(SessionEvent::Cleared);
                None
            }
            CommandFamily::AvailabilityCheck
            | CommandFamily::Wpa
            | CommandFamily::Wpncb
            | CommandFamily::PriceCheck => None,
        };
        if let Some(field) = field {
            self.notifier.publish(SessionEvent::Updated(field));
        }
    }

    /// Input no family claims. Entries that at least start like an
    /// availability check get that validator's diagnostic; everything else
    /// gets the catch-all availability hint.
    fn unrecognized(&self, cmd: &str, raw: &str) -> CommandResult {
        debug!("unrecognized entry {:?}", cmd);
        if cmd.starts_with('1') {
            let error = match availability::validate(cmd) {
                Err(error) => error,
                Ok(()) => CommandError::format(
                    "Invalid format: Availability check command is invalid",
                    "Format: 1[DD][MON][FROM][TO][AIRLINE]. Example: 115JUNDACBKK BG",
                ),
            };
            return CommandResult::fail(CommandFamily::AvailabilityCheck, raw, error);
        }
        CommandResult::ok(
            CommandFamily::AvailabilityCheck,
            raw,
            CommandPayload::Error(ErrorPayload {
                kind: ErrorKind::Format,
                message: "Invalid format: Command too short. Please check the format and try again for checking availability."
                    .to_string(),
                suggestion: "Format: 1[DD][MON][FROM][TO][AIRLINE]. Example: 115JUNDACBKK. For checking availability."
                    .to_string(),
                format: "1[DD][MON][FROM][TO][AIRLINE]".to_string(),
                example: "115JUNDACBKK BG. For checking availability.".to_string(),
            }),
        )
    }
}

impl Default for CommandInterpreter {
    fn default() -> Self {
        Self::new(TerminalConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sella_catalog::seed_flights;

    #[test]
    fn test_parse_matches_on_trimmed_uppercase_and_echoes_raw() {
        let interpreter = CommandInterpreter::default();
        let mut session = SessionRecord::default();
        let flights = seed_flights();

        let result = interpreter.parse(&mut session, &flights, "  115jundacbkk bg  ");

        assert_eq!(result.family, CommandFamily::AvailabilityCheck);
        assert!(!result.is_error());
        assert_eq!(result.raw_command, "  115jundacbkk bg  ");
        match result.payload {
            CommandPayload::Availability(availability) => {
                assert_eq!(availability.route, "DAC/BKK");
                assert!(availability.flights.iter().all(|f| f.airline.contains("BG")));
            }
            other => panic!("unexpected payload: {:?}", other),
        }
    }

    #[test]
    fn test_grammar_rejection_carries_family_templates() {
        let interpreter = CommandInterpreter::default();
        let mut session = SessionRecord::default();
        let flights = seed_flights();

        let result = interpreter.parse(&mut session, &flights, "-HOSSEN");

        assert_eq!(result.family, CommandFamily::NameInsert);
        assert!(result.is_error());
        match result.payload {
            CommandPayload::Error(error) => {
                assert_eq!(error.kind, ErrorKind::Format);
                assert_eq!(error.format, CommandFamily::NameInsert.format());
                assert_eq!(error.example, CommandFamily::NameInsert.example());
            }
            other => panic!("unexpected payload: {:?}", other),
        }
    }

    #[test]
    fn test_unclaimed_one_prefix_uses_availability_diagnostic() {
        let interpreter = CommandInterpreter::default();
        let mut session = SessionRecord::default();

        let result = interpreter.parse(&mut session, &[], "1XX");

        assert_eq!(result.family, CommandFamily::AvailabilityCheck);
        assert!(result.is_error());
        match result.payload {
            CommandPayload::Error(error) => {
                assert_eq!(error.format, "1[DD][MON][FROM][TO][AIRLINE]");
                assert!(error.message.starts_with("Invalid"));
            }
            other => panic!("unexpected payload: {:?}", other),
        }
    }

    #[test]
    fn test_unclaimed_entry_gets_catch_all_hint() {
        let interpreter = CommandInterpreter::default();
        let mut session = SessionRecord::default();

        let result = interpreter.parse(&mut session, &[], "ZZZ");

        assert_eq!(result.family, CommandFamily::AvailabilityCheck);
        assert!(result.is_error());
        match result.payload {
            CommandPayload::Error(error) => {
                assert_eq!(
                    error.message,
                    "Invalid format: Command too short. Please check the format and try again for checking availability."
                );
                assert_eq!(error.example, "115JUNDACBKK BG. For checking availability.");
            }
            other => panic!("unexpected payload: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_mutations_publish_session_events() {
        let interpreter = CommandInterpreter::default();
        let mut session = SessionRecord::default();
        let flights = seed_flights();
        let mut rx = interpreter.subscribe();

        interpreter.parse(&mut session, &flights, "115JUNDACBKK");
        interpreter.parse(&mut session, &flights, "01Y1");
        interpreter.parse(&mut session, &flights, "IG");

        // Availability is read-only, so the first event is the booking.
        assert_eq!(
            rx.recv().await.unwrap(),
            SessionEvent::Updated(SessionField::Bookings)
        );
        assert_eq!(rx.recv().await.unwrap(), SessionEvent::Cleared);
    }

    #[test]
    fn test_record_locator_announced_once() {
        let interpreter = CommandInterpreter::default();
        let mut session = SessionRecord::default();
        let mut rx = interpreter.subscribe();

        interpreter.parse(&mut session, &[], "ER");
        interpreter.parse(&mut session, &[], "ER");

        assert_eq!(
            rx.try_recv().unwrap(),
            SessionEvent::Updated(SessionField::Pnr)
        );
        assert!(rx.try_recv().is_err());
    }
}
