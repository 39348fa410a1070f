mod redirect;
pub use redirect::build_redirect_url;
