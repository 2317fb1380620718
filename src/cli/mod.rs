use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive chat session with the digital twin
    Chat,

    /// Send a single message and print the reply
    Ask {
        message: String,
    },

    /// Print the persona's rendered system instruction
    Persona,
}
