use super::{UserCommandService, password::validate_password};
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{DisplayName, NewUser, PasswordHash, Username},
};

pub struct RegisterUserCommand {
    pub username: String,
    pub name: String,
    pub password: String,
}

impl UserCommandService {
    pub async fn register(&self, command: RegisterUserCommand) -> ApplicationResult<UserDto> {
        let username = Username::new(command.username.as_str())?;
        let name = DisplayName::new(command.name)?;
        validate_password(&command.password)?;

        if self.user_repo.find_by_username(&username).await?.is_some() {
            return Err(ApplicationError::conflict("username already exists"));
        }

        let hashed = self.password_hasher.hash(&command.password).await?;
        let password_hash = PasswordHash::new(hashed)?;

        let new_user = NewUser::new(
            username,
            command.username,
            name,
            password_hash,
            self.clock.now(),
        );
        let user = self.user_repo.insert(new_user).await?;
        tracing::info!(user_id = %user.id, username = %user.username, "author registered");

        Ok(user.into())
    }
}
