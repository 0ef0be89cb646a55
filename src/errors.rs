use thiserror::Error;

/// Errors raised by the simulation engines.
///
/// The BST engine itself is total over integer input and never appears here;
/// everything below belongs to the validation boundary around it or to the
/// game simulations.
#[derive(Error, Debug)]
pub enum LabError {
    #[error("not a valid integer: '{0}'")]
    InvalidInteger(String),

    #[error("maximum of {0} values reached")]
    CapacityExceeded(usize),

    #[error("plate number cannot be empty")]
    EmptyPlate,

    #[error("plate number must be {0} characters or less")]
    PlateTooLong(usize),

    #[error("invalid plate number: '{0}'")]
    InvalidPlate(String),

    #[error("plate number must be unique: '{0}'")]
    DuplicatePlate(String),

    #[error("garage is full ({0} spots)")]
    GarageFull(usize),

    #[error("garage is empty")]
    GarageEmpty,

    #[error("car not found in the garage: '{0}'")]
    CarNotFound(String),

    #[error("car '{0}' is not next to depart")]
    NotNextToDepart(String),

    #[error("square {0} is outside the board")]
    OutOfBoard(usize),

    #[error("square {0} is already taken")]
    SquareTaken(usize),

    #[error("the game is already over")]
    GameOver,

    #[error("disk count must be between {min} and {max}, got {got}")]
    InvalidDiskCount { min: u8, max: u8, got: u8 },

    #[error("invalid peg: {0}")]
    InvalidPeg(usize),

    #[error("source and destination peg are the same")]
    SamePeg,

    #[error("no disk to move on peg {0}")]
    EmptyPeg(usize),

    #[error("cannot place disk {disk} onto smaller disk {onto}")]
    LargerOnSmaller { disk: u8, onto: u8 },

    #[error("cannot determine config directory")]
    ConfigDir,

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("failed to serialize settings: {0}")]
    Toml(#[from] toml::ser::Error),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

pub type LabResult<T> = Result<T, LabError>;
