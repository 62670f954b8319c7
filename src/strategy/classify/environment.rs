use std::{fmt, path::Path, str::FromStr};

use serde::Serialize;

use crate::{classify::SuiteClassifier, config::ConfigError};

/// Suffix every fork test file stem ends with.
const FORK_TEST_SUFFIX: &str = ".fork-test";

/// A network that fork tests can run against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ForkNetwork {
    Arbitrum,
    Mainnet,
    Base,
    Sonic,
    Holesky,
    Plume,
}

impl FromStr for ForkNetwork {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "arbitrumOne" | "arbitrum" => Ok(Self::Arbitrum),
            "mainnet" => Ok(Self::Mainnet),
            "base" => Ok(Self::Base),
            "sonic" => Ok(Self::Sonic),
            "holesky" => Ok(Self::Holesky),
            "plume" => Ok(Self::Plume),
            other => Err(ConfigError::UnknownForkNetwork(other.to_owned())),
        }
    }
}

/// A network that has its own set of unit tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitNetwork {
    Base,
    Sonic,
    Plume,
}

impl FromStr for UnitNetwork {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "base" => Ok(Self::Base),
            "sonic" => Ok(Self::Sonic),
            "plume" => Ok(Self::Plume),
            other => Err(ConfigError::UnknownUnitNetwork(other.to_owned())),
        }
    }
}

/// The profile of a test run.
///
/// Exactly one environment is active per run. Test files are assigned to an
/// environment by the suffix of their file stem (the file name without its
/// final extension):
///
/// | environment    | stem ends with      |
/// |----------------|---------------------|
/// | `MainnetFork`  | `mainnet.fork-test` |
/// | `ArbitrumFork` | `.arb.fork-test`    |
/// | `BaseFork`     | `.base.fork-test`   |
/// | `SonicFork`    | `.sonic.fork-test`  |
/// | `HoleskyFork`  | `.holesky.fork-test`|
/// | `PlumeFork`    | `.plume.fork-test`  |
/// | `BaseUnit`     | `.base`             |
/// | `SonicUnit`    | `.sonic`            |
/// | `PlumeUnit`    | `.plume`            |
///
/// [`Environment::Unit`] takes everything else: any file that is neither a
/// fork test nor one of the per-network unit tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Environment {
    #[default]
    Unit,
    ArbitrumFork,
    MainnetFork,
    BaseFork,
    SonicFork,
    HoleskyFork,
    PlumeFork,
    BaseUnit,
    SonicUnit,
    PlumeUnit,
}

impl Environment {
    /// Every named environment in resolution priority order.
    pub const NAMED: [Environment; 9] = [
        Self::ArbitrumFork,
        Self::MainnetFork,
        Self::BaseFork,
        Self::SonicFork,
        Self::HoleskyFork,
        Self::PlumeFork,
        Self::BaseUnit,
        Self::SonicUnit,
        Self::PlumeUnit,
    ];

    /// Pick the active environment from the run flags.
    ///
    /// A fork network wins over a unit network, no flag at all means plain
    /// unit tests.
    pub fn resolve(fork: Option<ForkNetwork>, unit: Option<UnitNetwork>) -> Self {
        match (fork, unit) {
            (Some(ForkNetwork::Arbitrum), _) => Self::ArbitrumFork,
            (Some(ForkNetwork::Mainnet), _) => Self::MainnetFork,
            (Some(ForkNetwork::Base), _) => Self::BaseFork,
            (Some(ForkNetwork::Sonic), _) => Self::SonicFork,
            (Some(ForkNetwork::Holesky), _) => Self::HoleskyFork,
            (Some(ForkNetwork::Plume), _) => Self::PlumeFork,
            (None, Some(UnitNetwork::Base)) => Self::BaseUnit,
            (None, Some(UnitNetwork::Sonic)) => Self::SonicUnit,
            (None, Some(UnitNetwork::Plume)) => Self::PlumeUnit,
            (None, None) => Self::Unit,
        }
    }

    /// The stem suffix of files belonging to this environment.
    ///
    /// `None` for [`Environment::Unit`], which is defined by exclusion.
    pub const fn suffix(self) -> Option<&'static str> {
        match self {
            Self::Unit => None,
            Self::ArbitrumFork => Some(".arb.fork-test"),
            Self::MainnetFork => Some("mainnet.fork-test"),
            Self::BaseFork => Some(".base.fork-test"),
            Self::SonicFork => Some(".sonic.fork-test"),
            Self::HoleskyFork => Some(".holesky.fork-test"),
            Self::PlumeFork => Some(".plume.fork-test"),
            Self::BaseUnit => Some(".base"),
            Self::SonicUnit => Some(".sonic"),
            Self::PlumeUnit => Some(".plume"),
        }
    }

    /// Whether the file at `path` belongs to this environment.
    ///
    /// Paths without a UTF-8 file stem belong to no environment.
    pub fn matches(self, path: &Path) -> bool {
        let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
            return false;
        };

        match self.suffix() {
            Some(suffix) => stem.ends_with(suffix),
            None => {
                !stem.ends_with(FORK_TEST_SUFFIX)
                    && [Self::BaseUnit, Self::SonicUnit, Self::PlumeUnit]
                        .into_iter()
                        .filter_map(Self::suffix)
                        .all(|suffix| !stem.ends_with(suffix))
            }
        }
    }

    /// The environment a file belongs to, if any.
    ///
    /// Fork test files for a network we don't know about belong nowhere.
    pub fn of(path: &Path) -> Option<Self> {
        Self::NAMED
            .into_iter()
            .chain([Self::Unit])
            .find(|env| env.matches(path))
    }
}

impl SuiteClassifier for Environment {
    fn classify(&self, path: &Path) -> bool {
        self.matches(path)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Unit => "unit",
            Self::ArbitrumFork => "arbitrum-fork",
            Self::MainnetFork => "mainnet-fork",
            Self::BaseFork => "base-fork",
            Self::SonicFork => "sonic-fork",
            Self::HoleskyFork => "holesky-fork",
            Self::PlumeFork => "plume-fork",
            Self::BaseUnit => "base-unit",
            Self::SonicUnit => "sonic-unit",
            Self::PlumeUnit => "plume-unit",
        })
    }
}
