//! Member entity. Referenced by itineraries and relations, never owned by them.

/// A registered member.
#[derive(Debug, Clone)]
pub struct Member {
    pub member_id: i64,
    pub email: String,
    pub nickname: String,
    pub active: bool,
}

impl Member {
    pub fn new(member_id: i64, email: String, nickname: String, active: bool) -> Self {
        Self {
            member_id,
            email,
            nickname,
            active,
        }
    }
}
