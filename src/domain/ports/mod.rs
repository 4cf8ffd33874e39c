pub mod chat_gateway;
pub mod commit_client;
pub mod member_repository;
pub mod team_repository;

pub use chat_gateway::{
    ChannelInfo, ChatGateway, CreatedRole, GatewayError, GuildMember,
};
pub use commit_client::{CommitClient, FetchOutcome};
pub use member_repository::MemberRepository;
pub use team_repository::TeamRepository;
