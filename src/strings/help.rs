//! # Help Text
//!
//! Help listing for the built-in commands, rendered with the prefix in use.

pub fn main(prefix: &str) -> String {
    format!(
        concat!(
            "**🤖 Command Gateway Help**\n",
            "Use: {p}command\n",
            "\n",
            "* {p}help: Show this message\n",
            "* {p}ping: Check the bot is alive\n",
            "* {p}uptime: Time since startup\n",
            "* {p}whoami: Show your user and room\n",
            "* {p}version: Bot version (admins only)\n",
        ),
        p = prefix
    )
}
