mod background;
mod character;
mod resource;
mod rote;
mod user;
