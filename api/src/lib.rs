// platform-independent pieces of the portfolio site
//
// nothing in here touches the DOM directly, so the webapp can stay a thin layer of
// components over these types and everything here can be unit tested natively
pub mod contact;
pub mod email;
pub mod profile;
pub mod project;
pub mod reveal;
pub mod theme;
