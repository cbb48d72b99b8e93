use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// How many unanswered attempts before a lead is marked unresponsive.
pub const MAX_UNANSWERED_ATTEMPTS: usize = 3;

/// Hours until the next follow-up is due, by unanswered-attempt count.
const FOLLOW_UP_HOURS: [i64; 3] = [24, 72, 168];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ContactChannel {
    Phone,
    Sms,
    Email,
}

/// How a contact attempt ended. `Scheduled` and `Declined` are the two
/// resolutions of an attempt that actually reached the person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AttemptDisposition {
    NoAnswer,
    LeftVoicemail,
    Scheduled,
    Declined,
    WrongNumber,
}

impl AttemptDisposition {
    fn unanswered(self) -> bool {
        matches!(self, Self::NoAnswer | Self::LeftVoicemail)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ContactAttempt {
    pub attempted_at: jiff::Timestamp,
    pub channel: ContactChannel,
    pub disposition: AttemptDisposition,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum LeadStatus {
    New,
    FollowUp,
    Scheduled,
    Declined,
    Unresponsive,
    BadContact,
}

/// An intake lead with its contact-attempt history and follow-up state.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Lead {
    pub id: Uuid,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub source: Option<String>,
    pub status: LeadStatus,
    pub attempts: Vec<ContactAttempt>,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

impl Lead {
    pub fn is_open(&self) -> bool {
        matches!(self.status, LeadStatus::New | LeadStatus::FollowUp)
    }

    fn unanswered_attempts(&self) -> usize {
        self.attempts
            .iter()
            .filter(|a| a.disposition.unanswered())
            .count()
    }

    /// Log a contact attempt and advance the follow-up state.
    ///
    /// Resolved leads (anything past `FollowUp`) are left as-is; staff can
    /// still log late attempts without reopening the lead.
    pub fn record_attempt(&mut self, attempt: ContactAttempt) -> LeadStatus {
        let disposition = attempt.disposition;
        self.updated_at = attempt.attempted_at;
        self.attempts.push(attempt);

        if !self.is_open() {
            return self.status;
        }

        self.status = match disposition {
            AttemptDisposition::Scheduled => LeadStatus::Scheduled,
            AttemptDisposition::Declined => LeadStatus::Declined,
            AttemptDisposition::WrongNumber => LeadStatus::BadContact,
            AttemptDisposition::NoAnswer | AttemptDisposition::LeftVoicemail => {
                if self.unanswered_attempts() >= MAX_UNANSWERED_ATTEMPTS {
                    LeadStatus::Unresponsive
                } else {
                    LeadStatus::FollowUp
                }
            }
        };
        self.status
    }

    /// When the next follow-up attempt is due: 1 day after the first
    /// unanswered attempt, 3 days after the second, 7 after any later one.
    /// `None` once the lead is resolved or before any attempt is logged.
    pub fn next_follow_up_due(&self) -> Option<jiff::Timestamp> {
        if self.status != LeadStatus::FollowUp {
            return None;
        }
        let last = self.attempts.last()?;
        let idx = self
            .unanswered_attempts()
            .saturating_sub(1)
            .min(FOLLOW_UP_HOURS.len() - 1);
        last.attempted_at
            .saturating_add(jiff::Span::new().hours(FOLLOW_UP_HOURS[idx]))
            .ok()
    }
}
