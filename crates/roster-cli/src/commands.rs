use clap::Subcommand;

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Add a user (surrounding whitespace is trimmed; blank names are ignored)
    Add {
        /// Name of the new user
        name: String,
    },

    /// List every stored user
    List,

    /// Delete every stored user
    Drop,

    /// Interactive form: type a name, then :add, :load, :drop or :quit
    Shell,
}
