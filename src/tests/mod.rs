mod format;
mod mode;
