mod arithmetic;
mod compare;
mod difference;
mod from;
mod with;
