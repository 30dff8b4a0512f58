//! Step sequencing for the checkout flow.
//!
//! The whole flow is driven by [`transition`], a pure function from the
//! current [`Session`] and an [`Event`] to the next session. Which screen
//! follows which is decided by [`rule`], a table keyed by step, event kind
//! and whether the token in play spans several networks. That last key is
//! what lets single-network tokens skip the network screen, both going
//! forward and coming back.

use log::{debug, info};

use crate::catalog;
use crate::error::CheckoutError;
use crate::models::{CurrencyOption, PaymentMethod, Step, Token};
use crate::utils::is_valid_email;

#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub step: Step,
    pub method: Option<PaymentMethod>,
    pub token: Option<Token>,
    pub option: Option<&'static CurrencyOption>,
    pub email: Option<String>,
    pub complete: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            step: Step::MethodSelect,
            method: None,
            token: None,
            option: None,
            email: None,
            complete: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    ChooseMethod(PaymentMethod),
    /// A token picked from the deduplicated currency list.
    ChooseToken(&'static CurrencyOption),
    /// A network offering for the token already chosen.
    ChooseNetwork(&'static CurrencyOption),
    Confirm,
    SubmitEmail(String),
    PaymentSent,
    Back,
}

impl Event {
    pub fn name(&self) -> &'static str {
        self.kind().name()
    }

    fn kind(&self) -> EventKind {
        match self {
            Event::ChooseMethod(PaymentMethod::Crypto) => EventKind::Crypto,
            Event::ChooseMethod(PaymentMethod::Fiat) => EventKind::Fiat,
            Event::ChooseToken(_) => EventKind::Token,
            Event::ChooseNetwork(_) => EventKind::Network,
            Event::Confirm => EventKind::Confirm,
            Event::SubmitEmail(_) => EventKind::Email,
            Event::PaymentSent => EventKind::PaymentSent,
            Event::Back => EventKind::Back,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum EventKind {
    Crypto,
    Fiat,
    Token,
    Network,
    Confirm,
    Email,
    PaymentSent,
    Back,
}

impl EventKind {
    fn name(&self) -> &'static str {
        match self {
            EventKind::Crypto => "choose crypto",
            EventKind::Fiat => "choose fiat",
            EventKind::Token => "choose token",
            EventKind::Network => "choose network",
            EventKind::Confirm => "confirm",
            EventKind::Email => "submit email",
            EventKind::PaymentSent => "payment sent",
            EventKind::Back => "back",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Rule {
    /// Move to the adjacent screen.
    Forward(Step),
    /// Move forward past the network screen.
    SkipForward(Step),
    /// Return to the adjacent screen.
    Backward(Step),
    /// Return past the network screen.
    SkipBackward(Step),
    /// Stay on the current screen and report why.
    Refuse,
}

fn rule(step: Step, kind: EventKind, multi_network: bool) -> Option<Rule> {
    use EventKind as E;
    use Step as S;

    let rule = match (step, kind, multi_network) {
        (S::MethodSelect, E::Crypto, _) => Rule::Forward(S::CryptoSelect),
        (S::MethodSelect, E::Fiat, _) => Rule::Refuse,
        (S::CryptoSelect, E::Token, true) => Rule::Forward(S::NetworkSelect),
        (S::CryptoSelect, E::Token, false) => Rule::SkipForward(S::Confirmation),
        (S::NetworkSelect, E::Network, _) => Rule::Forward(S::Confirmation),
        (S::Confirmation, E::Confirm, _) => Rule::Forward(S::EmailCapture),
        (S::EmailCapture, E::Email, _) => Rule::Forward(S::AddressDisplay),
        (S::AddressDisplay, E::PaymentSent, _) => Rule::Forward(S::Success),

        (S::CryptoSelect, E::Back, _) => Rule::Backward(S::MethodSelect),
        (S::NetworkSelect, E::Back, _) => Rule::Backward(S::CryptoSelect),
        (S::Confirmation, E::Back, true) => Rule::Backward(S::NetworkSelect),
        (S::Confirmation, E::Back, false) => Rule::SkipBackward(S::CryptoSelect),
        (S::EmailCapture, E::Back, _) => Rule::Backward(S::Confirmation),
        (S::AddressDisplay, E::Back, _) => Rule::Backward(S::EmailCapture),

        _ => return None,
    };
    Some(rule)
}

/// Whether the token an event is about needs its own network screen.
fn involves_multi_network(session: &Session, event: &Event) -> bool {
    let token = match event {
        Event::ChooseToken(option) => Some(option.token),
        _ => session.token,
    };
    token.map(catalog::is_multi_network).unwrap_or(false)
}

/// Checks an email the way the capture form does: something before the
/// `@`, a dotted domain after it, no whitespace anywhere.
pub fn validate_email(input: &str) -> Result<String, CheckoutError> {
    if input.trim().is_empty() {
        return Err(CheckoutError::EmailRequired);
    }
    if !is_valid_email(input) {
        return Err(CheckoutError::InvalidEmail);
    }
    Ok(input.to_string())
}

/// Applies `event` to `session`. On error the caller keeps `session` as is.
pub fn transition(session: &Session, event: Event) -> Result<Session, CheckoutError> {
    let multi = involves_multi_network(session, &event);
    let rule = rule(session.step, event.kind(), multi).ok_or(CheckoutError::EventNotAllowed {
        step: session.step,
        event: event.name(),
    })?;

    let mut next = session.clone();
    match rule {
        Rule::Refuse => return Err(CheckoutError::FiatUnsupported),
        Rule::Forward(step) | Rule::SkipForward(step) => {
            record(&mut next, event)?;
            if matches!(rule, Rule::SkipForward(_)) {
                debug!("Single-network token, skipping network selection");
            }
            next.step = step;
        }
        Rule::Backward(step) | Rule::SkipBackward(step) => {
            forget_from(&mut next, step);
            next.step = step;
        }
    }

    info!("Checkout step {} -> {}", session.step.number(), next.step.number());
    Ok(next)
}

/// Stores whatever the event carries.
fn record(session: &mut Session, event: Event) -> Result<(), CheckoutError> {
    match event {
        Event::ChooseMethod(method) => session.method = Some(method),
        Event::ChooseToken(option) => {
            session.token = Some(option.token);
            session.option = if catalog::is_multi_network(option.token) {
                None
            } else {
                Some(option)
            };
        }
        Event::ChooseNetwork(option) => {
            let token = session.token.unwrap_or(option.token);
            if option.token != token {
                return Err(CheckoutError::NetworkMismatch { token, network: option.network });
            }
            session.token = Some(token);
            session.option = Some(option);
        }
        Event::SubmitEmail(input) => session.email = Some(validate_email(&input)?),
        Event::PaymentSent => session.complete = true,
        Event::Confirm | Event::Back => {}
    }
    Ok(())
}

/// Drops the choices made on `step` and later, so a screen reached by going
/// back never shows stale data. The email is kept for prefilling.
fn forget_from(session: &mut Session, step: Step) {
    match step {
        Step::MethodSelect => {
            session.method = None;
            session.token = None;
            session.option = None;
        }
        Step::CryptoSelect => {
            session.token = None;
            session.option = None;
        }
        Step::NetworkSelect => session.option = None,
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{find, CATALOG};
    use crate::error::ErrorKind;
    use crate::models::Network;

    fn at_crypto_select() -> Session {
        transition(&Session::default(), Event::ChooseMethod(PaymentMethod::Crypto)).unwrap()
    }

    fn apply(session: Session, events: Vec<Event>) -> Session {
        events
            .into_iter()
            .fold(session, |s, e| transition(&s, e).unwrap())
    }

    #[test]
    fn starts_on_method_select() {
        let s = Session::default();
        assert_eq!(s.step, Step::MethodSelect);
        assert_eq!(s.step.number(), 1);
        assert!(!s.complete);
    }

    #[test]
    fn crypto_method_advances() {
        let s = at_crypto_select();
        assert_eq!(s.step, Step::CryptoSelect);
        assert_eq!(s.method, Some(PaymentMethod::Crypto));
    }

    #[test]
    fn fiat_is_refused_without_moving() {
        let err = transition(&Session::default(), Event::ChooseMethod(PaymentMethod::Fiat))
            .unwrap_err();
        assert_eq!(err, CheckoutError::FiatUnsupported);
        assert_eq!(err.kind(), ErrorKind::Unsupported);
    }

    #[test]
    fn stablecoins_go_to_network_select() {
        for option in CATALOG.iter().filter(|o| matches!(o.symbol(), "USDT" | "USDC")) {
            let s = transition(&at_crypto_select(), Event::ChooseToken(option)).unwrap();
            assert_eq!(s.step, Step::NetworkSelect, "{}", option.id);
            assert_eq!(s.token, Some(option.token));
            assert!(s.option.is_none());
        }
    }

    #[test]
    fn single_network_tokens_skip_to_confirmation() {
        for option in CATALOG.iter().filter(|o| !matches!(o.symbol(), "USDT" | "USDC")) {
            let s = transition(&at_crypto_select(), Event::ChooseToken(option)).unwrap();
            assert_eq!(s.step, Step::Confirmation, "{}", option.id);
            assert_eq!(s.option, Some(option));
        }
    }

    #[test]
    fn network_choice_must_match_token() {
        let s = apply(at_crypto_select(), vec![Event::ChooseToken(find("usdt-eth").unwrap())]);
        let err = transition(&s, Event::ChooseNetwork(find("usdc-bnb").unwrap())).unwrap_err();
        assert_eq!(
            err,
            CheckoutError::NetworkMismatch { token: Token::Usdt, network: Network::Bnb }
        );

        let s = transition(&s, Event::ChooseNetwork(find("usdt-tron").unwrap())).unwrap();
        assert_eq!(s.step, Step::Confirmation);
        assert_eq!(s.option.map(|o| o.network), Some(Network::Tron));
    }

    #[test]
    fn valid_email_advances() {
        let s = apply(
            at_crypto_select(),
            vec![Event::ChooseToken(find("btc").unwrap()), Event::Confirm],
        );
        assert_eq!(s.step, Step::EmailCapture);

        let s = transition(&s, Event::SubmitEmail("user@example.com".into())).unwrap();
        assert_eq!(s.step, Step::AddressDisplay);
        assert_eq!(s.email.as_deref(), Some("user@example.com"));
    }

    #[test]
    fn invalid_email_is_rejected_in_place() {
        let s = apply(
            at_crypto_select(),
            vec![Event::ChooseToken(find("btc").unwrap()), Event::Confirm],
        );

        let err = transition(&s, Event::SubmitEmail("not-an-email".into())).unwrap_err();
        assert_eq!(err, CheckoutError::InvalidEmail);
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(s.step, Step::EmailCapture);
        assert!(s.email.is_none());

        let err = transition(&s, Event::SubmitEmail("   ".into())).unwrap_err();
        assert_eq!(err, CheckoutError::EmailRequired);
    }

    #[test]
    fn validate_email_cases() {
        assert!(validate_email("a@b.co").is_ok());
        assert_eq!(validate_email(""), Err(CheckoutError::EmailRequired));
        assert_eq!(validate_email("user@example"), Err(CheckoutError::InvalidEmail));
        assert_eq!(validate_email(" user@example.com"), Err(CheckoutError::InvalidEmail));
    }

    #[test]
    fn end_to_end_usdt_on_eth() {
        let usdt = find("usdt-eth").unwrap();
        let s = apply(
            Session::default(),
            vec![
                Event::ChooseMethod(PaymentMethod::Crypto),
                Event::ChooseToken(usdt),
                Event::ChooseNetwork(usdt),
                Event::Confirm,
                Event::SubmitEmail("payer@example.com".into()),
                Event::PaymentSent,
            ],
        );

        assert_eq!(s.step, Step::Success);
        assert_eq!(s.step.number(), 7);
        assert!(s.complete);
        let option = s.option.unwrap();
        assert_eq!(option.symbol(), "USDT");
        assert_eq!(option.network.code(), "ETH");
        assert_eq!(s.email.as_deref(), Some("payer@example.com"));
    }

    #[test]
    fn success_is_terminal() {
        let btc = find("btc").unwrap();
        let s = apply(
            at_crypto_select(),
            vec![
                Event::ChooseToken(btc),
                Event::Confirm,
                Event::SubmitEmail("a@b.io".into()),
                Event::PaymentSent,
            ],
        );
        for event in [Event::Back, Event::Confirm, Event::PaymentSent] {
            let err = transition(&s, event).unwrap_err();
            assert!(matches!(err, CheckoutError::EventNotAllowed { step: Step::Success, .. }));
        }
    }

    #[test]
    fn back_is_not_allowed_on_first_step() {
        let err = transition(&Session::default(), Event::Back).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Flow);
    }

    #[test]
    fn events_out_of_order_are_rejected() {
        let err = transition(&Session::default(), Event::Confirm).unwrap_err();
        assert_eq!(
            err,
            CheckoutError::EventNotAllowed { step: Step::MethodSelect, event: "confirm" }
        );
    }

    #[test]
    fn back_from_confirmation_mirrors_the_skip() {
        let s = apply(at_crypto_select(), vec![Event::ChooseToken(find("eth").unwrap())]);
        assert_eq!(s.step, Step::Confirmation);

        let back = transition(&s, Event::Back).unwrap();
        assert_eq!(back.step, Step::CryptoSelect);
        assert!(back.token.is_none());
        assert!(back.option.is_none());
    }

    #[test]
    fn back_from_confirmation_after_network_choice() {
        let usdc = find("usdc-bnb").unwrap();
        let s = apply(
            at_crypto_select(),
            vec![Event::ChooseToken(usdc), Event::ChooseNetwork(usdc)],
        );

        let back = transition(&s, Event::Back).unwrap();
        assert_eq!(back.step, Step::NetworkSelect);
        assert_eq!(back.token, Some(Token::Usdc));
        assert!(back.option.is_none());

        let back = transition(&back, Event::Back).unwrap();
        assert_eq!(back.step, Step::CryptoSelect);
        assert!(back.token.is_none());
    }

    #[test]
    fn back_keeps_email_for_prefill() {
        let s = apply(
            at_crypto_select(),
            vec![
                Event::ChooseToken(find("bnb").unwrap()),
                Event::Confirm,
                Event::SubmitEmail("me@site.org".into()),
                Event::Back,
            ],
        );
        assert_eq!(s.step, Step::EmailCapture);
        assert_eq!(s.email.as_deref(), Some("me@site.org"));
        assert!(s.option.is_some());
    }

    #[test]
    fn back_to_start_forgets_method() {
        let s = transition(&at_crypto_select(), Event::Back).unwrap();
        assert_eq!(s, Session::default());
    }
}
