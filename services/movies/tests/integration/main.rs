mod helpers;

mod comment_test;
mod movie_test;
mod review_test;
mod router_test;
mod security_test;
mod uow_test;
mod user_test;
