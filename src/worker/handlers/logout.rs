use crate::{common::event::AtmReply, domain::session::Session};

pub fn handle(session: &mut Session) -> AtmReply {
    session.clear();
    AtmReply::LoggedOut
}
