pub mod mutation {
    pub use evolve_words_core::mutation::*;
}
pub mod oracle {
    pub use evolve_words_core::oracle::*;
}
pub mod population {
    pub use evolve_words_core::population::*;
}
pub mod simulation {
    pub use evolve_words_core::simulation::*;
}
pub mod sink {
    pub use evolve_words_core::sink::*;
}
pub mod cancel {
    pub use evolve_words_core::cancel::*;
}
pub mod worker {
    pub use evolve_words_core::worker::*;
}
pub mod config {
    pub use evolve_words_core::config::*;
}
pub mod vocabulary {
    pub use evolve_words_io::vocabulary::*;
}

pub mod data {
    pub use evolve_words_data::*;
}
