mod event;
mod gallery;
mod news;
