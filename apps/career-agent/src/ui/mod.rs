// Server-rendered pages: theme stylesheet, document shell, page bodies and
// the handlers that drive them from the visitor's session.

pub mod handlers;
pub mod layout;
pub mod pages;
pub mod theme;
