//! Discord REST implementation of the chat gateway port.

use async_trait::async_trait;
use reqwest::{header, Client as ReqwestClient, Response, StatusCode};
use std::time::Duration;
use tracing::{debug, warn};

use crate::domain::models::{ChannelSpec, Embed, PermissionOverwrite, RoleSpec};
use crate::domain::ports::{
    ChannelInfo, ChatGateway, CreatedRole, GatewayError, GuildMember,
};

use super::types::{
    channel_type_code, ChannelPayload, CreateChannelRequest, CreateRoleRequest, EmbedPayload,
    MemberPayload, MessagePayload, OverwritePayload, RolePayload, SendMessageRequest,
};

/// Configuration for the REST gateway.
#[derive(Debug, Clone)]
pub struct DiscordGatewayConfig {
    pub token: String,
    pub guild_id: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl DiscordGatewayConfig {
    pub fn new(token: String, guild_id: String) -> Self {
        Self {
            token,
            guild_id,
            base_url: "https://discord.com/api/v10".to_string(),
            timeout_secs: 30,
        }
    }
}

/// HTTP client against the Discord REST API with bot-token auth and
/// status-code error classification.
pub struct DiscordRestGateway {
    http_client: ReqwestClient,
    base_url: String,
    guild_id: String,
}

impl DiscordRestGateway {
    pub fn new(config: DiscordGatewayConfig) -> Result<Self, GatewayError> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&format!("Bot {}", config.token))
                .map_err(|e| GatewayError::InvalidResponse(format!("Invalid token: {e}")))?,
        );
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let http_client = ReqwestClient::builder()
            .pool_max_idle_per_host(10)
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: config.base_url,
            guild_id: config.guild_id,
        })
    }

    fn classify_error(status: StatusCode, body: String) -> GatewayError {
        match status {
            StatusCode::UNAUTHORIZED => GatewayError::Unauthorized,
            StatusCode::FORBIDDEN => GatewayError::Forbidden(body),
            StatusCode::NOT_FOUND => GatewayError::NotFound(body),
            StatusCode::TOO_MANY_REQUESTS => GatewayError::RateLimited,
            s if s.is_server_error() => GatewayError::Server(s.as_u16(), body),
            s => GatewayError::Unexpected(s.as_u16(), body),
        }
    }

    async fn check(response: Response) -> Result<Response, GatewayError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unable to read error body".to_string());
        warn!("Discord API error ({status}): {body}");
        Err(Self::classify_error(status, body))
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, GatewayError> {
        let url = format!("{}{path}", self.base_url);
        debug!("GET {url}");
        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;
        Self::check(response)
            .await?
            .json()
            .await
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))
    }

    async fn roles(&self) -> Result<Vec<RolePayload>, GatewayError> {
        self.get_json(&format!("/guilds/{}/roles", self.guild_id)).await
    }
}

#[async_trait]
impl ChatGateway for DiscordRestGateway {
    async fn find_role(&self, name: &str) -> Result<Option<CreatedRole>, GatewayError> {
        let roles = self.roles().await?;
        Ok(roles
            .into_iter()
            .find(|r| r.name == name)
            .map(CreatedRole::from))
    }

    async fn create_role(&self, spec: &RoleSpec) -> Result<CreatedRole, GatewayError> {
        let url = format!("{}/guilds/{}/roles", self.base_url, self.guild_id);
        debug!("POST {url}");

        let mut request = self.http_client.post(&url).json(&CreateRoleRequest {
            name: spec.name.clone(),
            color: spec.color.0,
            mentionable: spec.mentionable,
        });
        if let Some(reason) = &spec.reason {
            request = request.header("X-Audit-Log-Reason", reason);
        }

        let response = request
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;
        let payload: RolePayload = Self::check(response)
            .await?
            .json()
            .await
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;
        Ok(payload.into())
    }

    async fn delete_role(&self, role_id: &str, reason: &str) -> Result<(), GatewayError> {
        let url = format!("{}/guilds/{}/roles/{role_id}", self.base_url, self.guild_id);
        let response = self
            .http_client
            .delete(&url)
            .header("X-Audit-Log-Reason", reason)
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;
        Self::check(response).await.map(|_| ())
    }

    async fn assign_role(&self, user_id: &str, role_id: &str) -> Result<(), GatewayError> {
        let url = format!(
            "{}/guilds/{}/members/{user_id}/roles/{role_id}",
            self.base_url, self.guild_id
        );
        let response = self
            .http_client
            .put(&url)
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;
        Self::check(response).await.map(|_| ())
    }

    async fn get_member(&self, user_id: &str) -> Result<Option<GuildMember>, GatewayError> {
        let path = format!("/guilds/{}/members/{user_id}", self.guild_id);
        match self.get_json::<MemberPayload>(&path).await {
            Ok(payload) => Ok(Some(payload.into())),
            Err(GatewayError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn list_channels(&self) -> Result<Vec<ChannelInfo>, GatewayError> {
        let payloads: Vec<ChannelPayload> = self
            .get_json(&format!("/guilds/{}/channels", self.guild_id))
            .await?;
        Ok(payloads
            .into_iter()
            .filter_map(ChannelPayload::into_channel_info)
            .collect())
    }

    async fn create_channel(&self, spec: &ChannelSpec) -> Result<ChannelInfo, GatewayError> {
        let url = format!("{}/guilds/{}/channels", self.base_url, self.guild_id);
        debug!("POST {url}");

        let mut request = self.http_client.post(&url).json(&CreateChannelRequest {
            name: spec.name.clone(),
            kind: channel_type_code(spec.kind),
            parent_id: spec.parent_id.clone(),
            permission_overwrites: spec.overwrites.iter().map(OverwritePayload::from).collect(),
        });
        if let Some(reason) = &spec.reason {
            request = request.header("X-Audit-Log-Reason", reason);
        }

        let response = request
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;
        let payload: ChannelPayload = Self::check(response)
            .await?
            .json()
            .await
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;
        payload
            .into_channel_info()
            .ok_or_else(|| GatewayError::InvalidResponse("unsupported channel type".to_string()))
    }

    async fn update_channel_overwrites(
        &self,
        channel_id: &str,
        overwrites: &[PermissionOverwrite],
    ) -> Result<(), GatewayError> {
        let url = format!("{}/channels/{channel_id}", self.base_url);
        let payloads: Vec<OverwritePayload> =
            overwrites.iter().map(OverwritePayload::from).collect();
        let response = self
            .http_client
            .patch(&url)
            .json(&serde_json::json!({ "permission_overwrites": payloads }))
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;
        Self::check(response).await.map(|_| ())
    }

    async fn delete_channel(&self, channel_id: &str, reason: &str) -> Result<(), GatewayError> {
        let url = format!("{}/channels/{channel_id}", self.base_url);
        let response = self
            .http_client
            .delete(&url)
            .header("X-Audit-Log-Reason", reason)
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;
        Self::check(response).await.map(|_| ())
    }

    async fn send_embed(
        &self,
        channel_id: &str,
        content: Option<&str>,
        embed: &Embed,
    ) -> Result<String, GatewayError> {
        let url = format!("{}/channels/{channel_id}/messages", self.base_url);
        debug!("POST {url}");

        let response = self
            .http_client
            .post(&url)
            .json(&SendMessageRequest {
                content: content.map(str::to_string),
                embeds: vec![EmbedPayload::from(embed)],
            })
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;
        let payload: MessagePayload = Self::check(response)
            .await?
            .json()
            .await
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;
        Ok(payload.id)
    }

    async fn add_reaction(
        &self,
        channel_id: &str,
        message_id: &str,
        emoji: &str,
    ) -> Result<(), GatewayError> {
        let encoded: String = emoji
            .bytes()
            .map(|b| format!("%{b:02X}"))
            .collect();
        let url = format!(
            "{}/channels/{channel_id}/messages/{message_id}/reactions/{encoded}/@me",
            self.base_url
        );
        let response = self
            .http_client
            .put(&url)
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;
        Self::check(response).await.map(|_| ())
    }
}
