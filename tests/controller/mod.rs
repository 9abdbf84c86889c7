mod academic_year;
mod auth;
mod course;
mod department;
mod user;
