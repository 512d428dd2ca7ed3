pub mod film_list;
pub mod member_report;
pub mod schedule;

pub use film_list::FilmListService;
pub use member_report::MemberReportService;
pub use schedule::ScheduleService;
