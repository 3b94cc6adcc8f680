use serenity::{builder::CreateApplicationCommand, model::permissions::Permissions};

pub const NAME: &str = "reservas";

/// Create command for the reservation board of the configured administrator
pub fn reservas_command() -> CreateApplicationCommand {
    let mut command = CreateApplicationCommand::default();
    command
        .name(NAME)
        .description("Gestiona las reservas de tus recintos")
        .default_member_permissions(Permissions::MANAGE_GUILD)
        .dm_permission(false);

    command
}
