//! Traits describing the collaborators the carrier rules consume.
//!
//! Oracles expose geometry, technology levels, star rules, and the specialist
//! capability table. The [`Env`] aggregate bundles them so the engine can
//! access everything it needs without hard coupling to concrete
//! implementations.
mod distance;
mod error;
mod specialists;
mod stars;
mod technology;

pub use distance::DistanceOracle;
pub use error::OracleError;
pub use specialists::{
    LocalModifiers, SpecialModifiers, Specialist, SpecialistModifiers, SpecialistOracle,
};
pub use stars::StarOracle;
pub use technology::TechnologyOracle;

/// Aggregates read-only oracles required by the carrier rules.
pub struct Env<'a, D, T, S, P>
where
    D: DistanceOracle + ?Sized,
    T: TechnologyOracle + ?Sized,
    S: StarOracle + ?Sized,
    P: SpecialistOracle + ?Sized,
{
    distance: Option<&'a D>,
    technology: Option<&'a T>,
    stars: Option<&'a S>,
    specialists: Option<&'a P>,
}

impl<D, T, S, P> Clone for Env<'_, D, T, S, P>
where
    D: DistanceOracle + ?Sized,
    T: TechnologyOracle + ?Sized,
    S: StarOracle + ?Sized,
    P: SpecialistOracle + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<D, T, S, P> Copy for Env<'_, D, T, S, P>
where
    D: DistanceOracle + ?Sized,
    T: TechnologyOracle + ?Sized,
    S: StarOracle + ?Sized,
    P: SpecialistOracle + ?Sized,
{
}

pub type GameEnv<'a> = Env<
    'a,
    dyn DistanceOracle + 'a,
    dyn TechnologyOracle + 'a,
    dyn StarOracle + 'a,
    dyn SpecialistOracle + 'a,
>;

impl<'a, D, T, S, P> Env<'a, D, T, S, P>
where
    D: DistanceOracle + ?Sized,
    T: TechnologyOracle + ?Sized,
    S: StarOracle + ?Sized,
    P: SpecialistOracle + ?Sized,
{
    pub fn new(
        distance: Option<&'a D>,
        technology: Option<&'a T>,
        stars: Option<&'a S>,
        specialists: Option<&'a P>,
    ) -> Self {
        Self {
            distance,
            technology,
            stars,
            specialists,
        }
    }

    pub fn with_all(distance: &'a D, technology: &'a T, stars: &'a S, specialists: &'a P) -> Self {
        Self::new(
            Some(distance),
            Some(technology),
            Some(stars),
            Some(specialists),
        )
    }

    pub fn empty() -> Self {
        Self {
            distance: None,
            technology: None,
            stars: None,
            specialists: None,
        }
    }

    /// Returns the DistanceOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::DistanceNotAvailable` if no distance oracle was provided.
    pub fn distance(&self) -> Result<&'a D, OracleError> {
        self.distance.ok_or(OracleError::DistanceNotAvailable)
    }

    /// Returns the TechnologyOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::TechnologyNotAvailable` if no technology oracle was provided.
    pub fn technology(&self) -> Result<&'a T, OracleError> {
        self.technology.ok_or(OracleError::TechnologyNotAvailable)
    }

    /// Returns the StarOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::StarsNotAvailable` if no star oracle was provided.
    pub fn stars(&self) -> Result<&'a S, OracleError> {
        self.stars.ok_or(OracleError::StarsNotAvailable)
    }

    /// Returns the SpecialistOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::SpecialistsNotAvailable` if no specialist oracle was provided.
    pub fn specialists(&self) -> Result<&'a P, OracleError> {
        self.specialists.ok_or(OracleError::SpecialistsNotAvailable)
    }
}

impl<'a, D, T, S, P> Env<'a, D, T, S, P>
where
    D: DistanceOracle + 'a,
    T: TechnologyOracle + 'a,
    S: StarOracle + 'a,
    P: SpecialistOracle + 'a,
{
    /// Converts this environment into a trait-object based `GameEnv`.
    pub fn as_game_env(&self) -> GameEnv<'a> {
        let distance: Option<&'a dyn DistanceOracle> = self.distance.map(|oracle| oracle as _);
        let technology: Option<&'a dyn TechnologyOracle> =
            self.technology.map(|oracle| oracle as _);
        let stars: Option<&'a dyn StarOracle> = self.stars.map(|oracle| oracle as _);
        let specialists: Option<&'a dyn SpecialistOracle> =
            self.specialists.map(|oracle| oracle as _);
        Env::new(distance, technology, stars, specialists)
    }
}
