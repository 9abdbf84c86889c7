pub use super::academic_year::Entity as AcademicYear;
pub use super::course::Entity as Course;
pub use super::department::Entity as Department;
pub use super::enrollment::Entity as Enrollment;
pub use super::faculty::Entity as Faculty;
pub use super::student::Entity as Student;
pub use super::user::Entity as User;
