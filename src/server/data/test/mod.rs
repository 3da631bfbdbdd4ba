mod account;
mod category;
mod favorite;
mod review;
mod revoked_token;
mod shopper;
mod store;
mod user_action;
