mod quiz_vm;

pub use quiz_vm::{
    GuessButtonVm, NoticeTone, NoticeVm, QuizNotices, QuizStatusVm, SummaryVm, map_guess_buttons,
    map_quiz_status, start_run, submit_guess,
};
