pub(crate) mod card;

pub(crate) use card::Card;
