mod item;
mod state;

pub use item::Item;
pub use state::AppState;
