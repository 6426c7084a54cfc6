pub mod currency;
pub mod dataset;
pub mod fixture;
pub mod player;
pub mod roster;
pub mod team;

pub use dataset::{DataIssues, DataSet};
pub use fixture::{Fixture, Venue, MAX_DIFFICULTY, MIN_DIFFICULTY};
pub use player::{Availability, Player, PlayerId, Position, TeamId};
pub use roster::RosterSnapshot;
pub use team::Team;
