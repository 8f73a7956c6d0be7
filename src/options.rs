//! Game configuration options.

use alloc::string::String;

/// Configuration options for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use twentyone::GameOptions;
///
/// let options = GameOptions::default()
///     .with_player_name("Ada")
///     .with_dealer_name("House");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Display name for the player seat.
    pub player_name: String,
    /// Display name for the dealer seat.
    pub dealer_name: String,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            player_name: String::from("Player"),
            dealer_name: String::from("Dealer"),
        }
    }
}

impl GameOptions {
    /// Sets the display name for the player seat.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::GameOptions;
    ///
    /// let options = GameOptions::default().with_player_name("Ada");
    /// assert_eq!(options.player_name, "Ada");
    /// ```
    #[must_use]
    pub fn with_player_name(mut self, name: &str) -> Self {
        self.player_name = String::from(name);
        self
    }

    /// Sets the display name for the dealer seat.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_name("House");
    /// assert_eq!(options.dealer_name, "House");
    /// ```
    #[must_use]
    pub fn with_dealer_name(mut self, name: &str) -> Self {
        self.dealer_name = String::from(name);
        self
    }
}
