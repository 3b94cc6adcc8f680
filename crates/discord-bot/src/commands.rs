use serenity::builder::CreateApplicationCommands;

pub mod arrendar;
pub mod reservas;

/// Register all commands for the bot.
///
/// `/arrendar` opens the venue catalog and booking dialog, `/reservas` opens the
/// administrator's reservation board.
pub fn register_commands(commands: &mut CreateApplicationCommands) -> &mut CreateApplicationCommands {
    commands.create_application_command(|command| {
        *command = arrendar::arrendar_command();
        command
    });

    commands.create_application_command(|command| {
        *command = reservas::reservas_command();
        command
    });

    commands
}
