mod dialogs;
mod filter_bar;
mod form;
mod map;
mod navbar;
mod resource_list;
mod stars;

pub use self::{
    dialogs::*, filter_bar::*, map::*, navbar::*, resource_list::*, stars::*,
};
