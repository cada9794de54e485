#[cfg(test)]
mod common;

#[cfg(test)]
mod page_tests;

#[cfg(test)]
mod dashboard_tests;

#[cfg(test)]
mod logout_tests;

#[cfg(test)]
mod stored_user_tests;

#[cfg(test)]
mod config_tests;
