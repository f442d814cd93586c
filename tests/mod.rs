mod cli;
mod helpers;
