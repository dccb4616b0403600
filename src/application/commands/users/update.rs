use super::UserCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::ImageUrl,
        user::{DisplayName, UserUpdate},
    },
};

pub struct UpdateProfileCommand {
    pub name: Option<String>,
    /// `Some(None)` removes the avatar.
    pub image: Option<Option<String>>,
}

impl UserCommandService {
    pub async fn update_profile(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateProfileCommand,
    ) -> ApplicationResult<UserDto> {
        let mut update = UserUpdate::new(actor.id, self.clock.now());

        if let Some(name) = command.name {
            update = update.with_name(DisplayName::new(name)?);
        }

        if let Some(image) = command.image {
            update = update.with_image(image.map(ImageUrl::new).transpose()?);
        }

        if update.is_empty() {
            return Err(ApplicationError::validation(
                "at least one field must be provided",
            ));
        }

        let user = self.user_repo.update(update).await?;
        Ok(user.into())
    }
}
