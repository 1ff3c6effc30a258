//! Account DTOs
//!
//! Request parameters and the account record exchanged with clients.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::models::user::{BanSettings, RegisterUserData, UserAccount, UserInfoChanges};

/// Wire values of the ban switch
const BAN_ON: &str = "1";
const BAN_OFF: &str = "0";

/// Validates the ban switch is "0" or "1"
fn validate_ban_flag(flag: &str) -> Result<(), validator::ValidationError> {
    if flag == BAN_ON || flag == BAN_OFF {
        Ok(())
    } else {
        let mut error = validator::ValidationError::new("ban_flag");
        error.message = Some("isActived must be \"0\" or \"1\"".into());
        Err(error)
    }
}

fn default_ban_flag() -> String {
    BAN_OFF.to_string()
}

/// Parameters of `POST /api/login`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginParams {
    #[validate(length(min = 1, max = 64, message = "username must be between 1 and 64 characters"))]
    pub username: String,

    #[validate(length(min = 1, max = 128, message = "password must be between 1 and 128 characters"))]
    pub password: String,
}

/// Parameters of `POST /api/register`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterParams {
    #[validate(length(min = 1, max = 64, message = "username must be between 1 and 64 characters"))]
    pub username: String,

    #[validate(length(min = 1, max = 64, message = "nickname must be between 1 and 64 characters"))]
    pub nickname: String,

    #[validate(length(min = 1, max = 128, message = "password must be between 1 and 128 characters"))]
    pub password: String,
}

impl From<RegisterParams> for RegisterUserData {
    fn from(params: RegisterParams) -> Self {
        Self {
            username: params.username,
            nickname: params.nickname,
            password: params.password,
        }
    }
}

/// Parameters of `GET /api/live/changePassword`
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordParams {
    #[validate(length(min = 1, max = 64, message = "userName must be between 1 and 64 characters"))]
    pub user_name: String,

    #[validate(length(min = 1, max = 128, message = "oldPassword must be between 1 and 128 characters"))]
    pub old_password: String,

    #[validate(length(min = 1, max = 128, message = "newPassword must be between 1 and 128 characters"))]
    pub new_password: String,
}

/// Full account record
///
/// Sent back by login, register and changeUserInfo, and accepted as the body
/// of changeUserInfo. On input only `userName`, `nickName` and the ban fields
/// are used.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserInfoDto {
    #[serde(default)]
    pub uid: String,

    #[validate(length(min = 1, max = 64, message = "userName must be between 1 and 64 characters"))]
    pub user_name: String,

    #[validate(length(min = 1, max = 64, message = "nickName must be between 1 and 64 characters"))]
    pub nick_name: String,

    #[serde(default)]
    pub password: String,

    #[serde(default = "default_ban_flag")]
    #[validate(custom(function = "validate_ban_flag"))]
    pub is_actived: String,

    #[serde(default)]
    pub all_content: String,

    #[serde(default)]
    pub selected_content: String,
}

impl UserInfoDto {
    /// Split into the target username and the changes to apply
    #[must_use]
    pub fn into_changes(self) -> (String, UserInfoChanges) {
        let changes = UserInfoChanges {
            nickname: self.nick_name,
            ban: BanSettings {
                active: self.is_actived == BAN_ON,
                all_content: self.all_content,
                selected_content: self.selected_content,
            },
        };
        (self.user_name, changes)
    }
}

impl From<UserAccount> for UserInfoDto {
    fn from(account: UserAccount) -> Self {
        let ban = account.ban();
        Self {
            uid: account.uid().to_string(),
            user_name: account.username().to_string(),
            nick_name: account.nickname().to_string(),
            password: account.password().to_string(),
            is_actived: if ban.active { BAN_ON } else { BAN_OFF }.to_string(),
            all_content: ban.all_content.clone(),
            selected_content: ban.selected_content.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_ban_flag() {
        assert!(validate_ban_flag("0").is_ok());
        assert!(validate_ban_flag("1").is_ok());
        assert!(validate_ban_flag("true").is_err());
        assert!(validate_ban_flag("").is_err());
    }

    #[test]
    fn test_user_info_serializes_client_field_names() {
        let account = UserAccount::new(RegisterUserData {
            username: "alice".to_string(),
            nickname: "小爱".to_string(),
            password: "hash".to_string(),
        });
        let json = serde_json::to_value(UserInfoDto::from(account)).unwrap();

        assert_eq!(json["userName"], "alice");
        assert_eq!(json["nickName"], "小爱");
        assert_eq!(json["password"], "hash");
        assert_eq!(json["isActived"], "0");
        assert_eq!(json["allContent"], "");
        assert_eq!(json["selectedContent"], "");
        assert_eq!(json["uid"].as_str().unwrap().len(), 32);
    }

    #[test]
    fn test_user_info_body_defaults_missing_fields() {
        let dto: UserInfoDto =
            serde_json::from_str(r#"{"userName":"alice","nickName":"新昵称"}"#).unwrap();

        assert!(dto.validate().is_ok());
        let (username, changes) = dto.into_changes();
        assert_eq!(username, "alice");
        assert_eq!(changes.nickname, "新昵称");
        assert_eq!(changes.ban, BanSettings::default());
    }

    #[test]
    fn test_user_info_body_maps_ban_switch() {
        let dto: UserInfoDto = serde_json::from_str(
            r#"{"uid":"abc","userName":"alice","nickName":"A","password":"x",
                "isActived":"1","allContent":"剧透;广告","selectedContent":"广告"}"#,
        )
        .unwrap();

        let (_, changes) = dto.into_changes();
        assert!(changes.ban.active);
        assert_eq!(changes.ban.all_content, "剧透;广告");
    }

    #[test]
    fn test_user_info_rejects_unknown_ban_flag() {
        let dto: UserInfoDto = serde_json::from_str(
            r#"{"userName":"alice","nickName":"A","isActived":"yes"}"#,
        )
        .unwrap();

        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_change_password_params_use_camel_case() {
        let params: ChangePasswordParams = serde_json::from_str(
            r#"{"userName":"alice","oldPassword":"old","newPassword":"new"}"#,
        )
        .unwrap();

        assert_eq!(params.user_name, "alice");
        assert_eq!(params.old_password, "old");
        assert_eq!(params.new_password, "new");
    }

    #[test]
    fn test_register_params_validation() {
        let empty = RegisterParams {
            username: String::new(),
            nickname: "n".to_string(),
            password: "p".to_string(),
        };
        assert!(empty.validate().is_err());

        let too_long = RegisterParams {
            username: "u".repeat(65),
            nickname: "n".to_string(),
            password: "p".to_string(),
        };
        assert!(too_long.validate().is_err());

        let ok = RegisterParams {
            username: "u".to_string(),
            nickname: "n".to_string(),
            password: "p".to_string(),
        };
        assert!(ok.validate().is_ok());
    }
}
