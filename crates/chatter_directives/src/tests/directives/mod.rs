mod columns;
mod compact;
mod helpers;
mod message;
