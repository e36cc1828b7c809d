use std::fmt;

use serenity::all::{GuildId, InteractionId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresenceStatus {
    Online,
    Idle,
    DoNotDisturb,
    Offline,
    /// No presence has been seen for the member.
    Absent,
}

impl PresenceStatus {
    pub fn is_online(self) -> bool {
        matches!(
            self,
            PresenceStatus::Online | PresenceStatus::Idle | PresenceStatus::DoNotDisturb
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MemberSnapshot {
    pub is_bot: bool,
    pub status: PresenceStatus,
}

/// Point-in-time view of the configured guild, re-read for every event.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildSnapshot {
    pub id: GuildId,
    pub name: String,
    pub icon_url: Option<String>,
    pub member_count: u64,
    pub members: Vec<MemberSnapshot>,
    /// False when the members came without presences (REST), so nobody looks online.
    pub presences_loaded: bool,
}

/// Online vs total human members. Bots are never counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PresenceSummary {
    pub online: usize,
    pub total: usize,
}

impl PresenceSummary {
    pub fn from_members<'a>(members: impl IntoIterator<Item = &'a MemberSnapshot>) -> Self {
        members
            .into_iter()
            .filter(|member| !member.is_bot)
            .fold(Self::default(), |acc, member| Self {
                online: acc.online + usize::from(member.status.is_online()),
                total: acc.total + 1,
            })
    }
}

impl fmt::Display for PresenceSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.online, self.total)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BotIdentity {
    /// Custom avatar only.
    pub avatar_url: Option<String>,
    /// Custom avatar, or the default one.
    pub face_url: String,
}

/// User who invoked a slash command.
#[derive(Debug, Clone, PartialEq)]
pub struct Requester {
    pub name: String,
    pub face_url: String,
}

/// Enough of an interaction to answer it later.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionHandle {
    pub id: InteractionId,
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::{MemberSnapshot, PresenceStatus, PresenceSummary};

    fn member(is_bot: bool, status: PresenceStatus) -> MemberSnapshot {
        MemberSnapshot { is_bot, status }
    }

    #[test]
    fn test_online_statuses() {
        assert!(PresenceStatus::Online.is_online());
        assert!(PresenceStatus::Idle.is_online());
        assert!(PresenceStatus::DoNotDisturb.is_online());
        assert!(!PresenceStatus::Offline.is_online());
        assert!(!PresenceStatus::Absent.is_online());
    }

    #[test]
    fn test_summary_excludes_bots() {
        let members = vec![
            member(false, PresenceStatus::Online),
            member(true, PresenceStatus::Online),
            member(false, PresenceStatus::Offline),
            member(true, PresenceStatus::Idle),
            member(false, PresenceStatus::DoNotDisturb),
            member(false, PresenceStatus::Absent),
        ];
        let summary = PresenceSummary::from_members(&members);
        assert_eq!(summary, PresenceSummary { online: 2, total: 4 });
        assert_eq!(summary.to_string(), "2/4");
    }

    #[test]
    fn test_summary_empty_guild() {
        let summary = PresenceSummary::from_members(&Vec::<MemberSnapshot>::new());
        assert_eq!(summary, PresenceSummary { online: 0, total: 0 });
    }

    #[test]
    fn test_summary_online_never_exceeds_total() {
        let statuses = [
            PresenceStatus::Online,
            PresenceStatus::Idle,
            PresenceStatus::DoNotDisturb,
            PresenceStatus::Offline,
            PresenceStatus::Absent,
        ];
        let members: Vec<_> = (1..=40)
            .map(|i| member(i % 3 == 0, statuses[(i % 5) as usize]))
            .collect();
        let summary = PresenceSummary::from_members(&members);
        let humans = members.iter().filter(|m| !m.is_bot).count();
        assert!(summary.online <= summary.total);
        assert_eq!(summary.total, humans);
    }
}
