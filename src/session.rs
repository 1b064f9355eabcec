use std::rc::Rc;

use log::info;
use yew::prelude::*;

/// Which top-level view the root renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionView {
    Gate,
    Dashboard,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionAction {
    Login,
    Logout,
}

/// In-memory login flag. Never persisted; a reload starts logged out.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub logged_in: bool,
}

impl Session {
    pub fn view(&self) -> SessionView {
        if self.logged_in {
            SessionView::Dashboard
        } else {
            SessionView::Gate
        }
    }
}

impl Reducible for Session {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let logged_in = matches!(action, SessionAction::Login);
        if logged_in == self.logged_in {
            return self;
        }
        let next = Session { logged_in };
        info!("Session {:?}: showing {:?}", action, next.view());
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(actions: &[SessionAction]) -> Rc<Session> {
        actions
            .iter()
            .fold(Rc::new(Session::default()), |session, action| session.reduce(*action))
    }

    #[test]
    fn starts_on_the_gate() {
        assert_eq!(Session::default().view(), SessionView::Gate);
    }

    #[test]
    fn login_then_logout_round_trips() {
        assert_eq!(apply(&[SessionAction::Login]).view(), SessionView::Dashboard);
        assert_eq!(
            apply(&[SessionAction::Login, SessionAction::Logout]).view(),
            SessionView::Gate
        );
    }

    #[test]
    fn repeated_action_keeps_the_same_state() {
        let session = Rc::new(Session { logged_in: true });
        let next = session.clone().reduce(SessionAction::Login);
        assert!(Rc::ptr_eq(&session, &next));
    }

    #[test]
    fn same_sequence_same_view() {
        use SessionAction::*;
        let sequence = [Login, Logout, Login, Login, Logout, Login];
        assert_eq!(apply(&sequence), apply(&sequence));
        assert_eq!(apply(&sequence).view(), SessionView::Dashboard);
    }
}
