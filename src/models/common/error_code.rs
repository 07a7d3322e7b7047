/// 业务错误码
///
/// 写入 ApiResponse.code 字段，与 HTTP 状态码配合使用。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Success = 0,

    // 通用错误 (1xxx)
    BadRequest = 1000,
    Unauthorized = 1001,
    PermissionDenied = 1002,
    NotFound = 1003,
    TooManyRequests = 1004,
    InternalServerError = 1005,

    // 认证与用户 (2xxx)
    AuthFailed = 2000,
    RegisterFailed = 2001,
    UserNameInvalid = 2002,
    UserEmailInvalid = 2003,
    UserPasswordInvalid = 2004,
    UserNameAlreadyExists = 2005,
    UserEmailAlreadyExists = 2006,
    UserNotFound = 2007,

    // 讲师 (3xxx)
    InstructorProfileExists = 3000,
    InstructorNotFound = 3001,
    InstructorPermissionDenied = 3002,

    // 课程 (4xxx)
    CourseNotFound = 4000,
    CourseCreationFailed = 4001,
    CoursePermissionDenied = 4002,
    CourseNotPublished = 4003,
    CoursePublishRejected = 4004,

    // 讲座与文件 (5xxx)
    LectureNotFound = 5000,
    LectureVideoMissing = 5001,
    FileUploadFailed = 5002,
    FileSizeExceeded = 5003,
    FileTypeNotAllowed = 5004,
    FileNotFound = 5005,
    MultifileUploadNotAllowed = 5006,
    TranscriptMissing = 5007,

    // 报名与进度 (6xxx)
    AlreadyEnrolled = 6000,
    NotEnrolled = 6001,
    EnrollmentFailed = 6002,

    // 测验 (7xxx)
    QuizNotFound = 7000,
    QuizInvalid = 7001,
    QuizAttemptInvalid = 7002,

    // 评价 (8xxx)
    ReviewAlreadyExists = 8000,
    ReviewNotFound = 8001,
    ReviewRatingInvalid = 8002,

    // 问答 (9xxx)
    QuestionNotFound = 9000,
}
