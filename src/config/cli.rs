use crate::domain::ports::Presenter;
use crate::utils::error::BrowseError;

/// Terminal presenter. Breed lists go to stdout (numbered in interactive
/// mode), notices to stderr.
#[derive(Debug, Clone)]
pub struct ConsolePresenter {
    numbered: bool,
}

impl ConsolePresenter {
    pub fn new(numbered: bool) -> Self {
        Self { numbered }
    }
}

impl Presenter for ConsolePresenter {
    fn breeds_loaded(&self, breeds: &[String]) {
        if breeds.is_empty() {
            println!("No breeds available.");
            return;
        }

        if self.numbered {
            for (i, breed) in breeds.iter().enumerate() {
                println!("{:>3}. {}", i + 1, breed);
            }
        } else {
            for breed in breeds {
                println!("{}", breed);
            }
        }
    }

    fn breeds_failed(&self, error: &BrowseError) {
        eprintln!("❌ {}", error.user_friendly_message());
        eprintln!("💡 建議: {}", error.recovery_suggestion());
    }

    fn image_loaded(&self, breed: &str, image_url: &str) {
        println!("🐶 {}: {}", breed, image_url);
    }

    // Image failures collapse into a single generic notice regardless of
    // the underlying error kind; the detailed variant only reaches the log.
    fn image_failed(&self, breed: &str, _error: &BrowseError) {
        eprintln!("❌ Could not load an image for '{}'. Please try again.", breed);
    }
}
