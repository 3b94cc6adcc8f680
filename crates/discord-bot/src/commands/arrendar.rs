use serenity::builder::CreateApplicationCommand;

pub const NAME: &str = "arrendar";

/// Create command for browsing venues and booking a court
pub fn arrendar_command() -> CreateApplicationCommand {
    let mut command = CreateApplicationCommand::default();
    command
        .name(NAME)
        .description("Busca un recinto deportivo y reserva una cancha")
        .dm_permission(true);

    command
}
