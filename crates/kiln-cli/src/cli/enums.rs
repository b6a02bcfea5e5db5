use clap::ValueEnum;
use kiln_config::Mode;

/// Build mode override
#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum ModeArg {
    /// Stable names, source maps, live reload, no minification
    #[value(name = "development")]
    Development,

    /// Content-hashed names, minifiers and the bundle analyzer
    #[value(name = "production")]
    Production,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Development => Mode::Development,
            ModeArg::Production => Mode::Production,
        }
    }
}
