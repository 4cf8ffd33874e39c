pub mod announcer;
pub mod deadline;
pub mod poll;
pub mod provisioner;
pub mod reminder;
pub mod team;

pub use announcer::{AnnouncementSummary, Announcer};
pub use deadline::{count_after_deadline, DeadlineService, DefaulterReport};
pub use poll::PollService;
pub use provisioner::{ChannelSetupSummary, Provisioner, RoleSetupSummary};
pub use reminder::ReminderScheduler;
pub use team::{CreateTeam, TeamService, UpdateOutcome};
