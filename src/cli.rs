use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Calculates the "effective points" of all NHL players since a given season.
///
/// A goal is effective when the winning team needed it: in a game decided in
/// regulation that is the winner's first (losing goals + 1) goals, and in a
/// game decided in overtime or a shootout every goal by either team.
/// Scorers and assisting players each get one point per effective goal.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// The season to calculate points from, by its starting year. For example
    /// 2010 counts the 2010-2011 season and every season after it.
    #[arg(required_unless_present_any = ["list_config", "set_api_domain"])]
    pub season: Option<i32>,

    /// Print per-season and per-game progress to the terminal.
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the totals as JSON instead of plain text.
    #[arg(long, help_heading = "Output")]
    pub json: bool,

    /// Update the API domain stored in the config file.
    #[arg(long = "set-api-domain", value_name = "API_DOMAIN", help_heading = "Configuration")]
    pub set_api_domain: Option<String>,

    /// List current configuration settings.
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Specify a custom log file path. If not provided, logs are written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

impl Args {
    /// True when the invocation only touches configuration.
    pub fn is_config_command(&self) -> bool {
        self.list_config || self.set_api_domain.is_some()
    }
}
